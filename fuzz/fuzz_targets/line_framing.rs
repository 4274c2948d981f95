//! Fuzz target for CRLF framing
//!
//! The first byte picks a chunk size; the rest is fed in chunks of that
//! size and must produce the same lines as feeding it in one go.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_client::LineBuffer;

fuzz_target!(|data: &[u8]| {
    let Some((&size, stream)) = data.split_first() else {
        return;
    };
    let size = usize::from(size).max(1);

    let mut whole = LineBuffer::new();
    let expected = whole.feed(stream);

    let mut chunked = LineBuffer::new();
    let mut got = Vec::new();
    for chunk in stream.chunks(size) {
        got.extend(chunked.feed(chunk));
    }

    assert_eq!(got, expected);
    assert_eq!(chunked.pending(), whole.pending());
});
