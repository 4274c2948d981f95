//! Fuzz target for IRC message parsing
//!
//! Feeds arbitrary text to the parser and checks that anything it accepts
//! renders to a line that parses back to the same message.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_client::Message;
use std::str;

fuzz_target!(|data: &[u8]| {
    // Only fuzz valid UTF-8 strings to focus on protocol-level issues
    if let Ok(input) = str::from_utf8(data) {
        if input.len() > 512 {
            return;
        }

        if let Ok(message) = Message::parse(input) {
            let rendered = message.render();
            let reparsed = Message::parse(&rendered).expect("rendered message must parse");
            assert_eq!(message, reparsed);
        }
    }
});
