//! CRLF line framing.
//!
//! [`LineBuffer`] accumulates raw bytes from the transport and hands back
//! every complete `\r\n`-terminated line, keeping the unterminated tail for
//! the next call. It works on bytes rather than decoded text so that a
//! delimiter split across two reads (CR in one, LF in the next) is still
//! recognised.
//!
//! The splitting itself lives in [`LineCodec`], which also implements the
//! tokio-util `Decoder` trait for use with `FramedRead`.

use bytes::{Bytes, BytesMut};

/// Line delimiter.
pub const CRLF: &[u8] = b"\r\n";

/// CRLF splitter that remembers how far it has already scanned.
#[derive(Debug, Default)]
pub struct LineCodec {
    /// Index of the next byte to check for a delimiter.
    next_index: usize,
}

impl LineCodec {
    /// Create a new codec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split one complete line off the front of `src`, delimiter removed.
    pub fn split_line(&mut self, src: &mut BytesMut) -> Option<Bytes> {
        // `next_index` never points past a lone trailing CR, so a delimiter
        // straddling two reads is found on the next pass.
        let start = self.next_index.min(src.len());
        match src[start..].windows(CRLF.len()).position(|w| w == CRLF) {
            Some(offset) => {
                let end = start + offset;
                let mut line = src.split_to(end + CRLF.len());
                line.truncate(end);
                self.next_index = 0;
                Some(line.freeze())
            }
            None => {
                self.next_index = src.len().saturating_sub(CRLF.len() - 1);
                None
            }
        }
    }
}

#[cfg(feature = "tokio")]
impl tokio_util::codec::Decoder for LineCodec {
    type Item = Bytes;
    type Error = crate::error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> crate::error::Result<Option<Bytes>> {
        Ok(self.split_line(src))
    }
}

/// Buffer of bytes received but not yet terminated by CRLF.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: BytesMut,
    codec: LineCodec,
}

impl LineBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk of received bytes and return every line it completes.
    ///
    /// ```
    /// use slirc_client::line::LineBuffer;
    ///
    /// let mut buf = LineBuffer::new();
    /// assert!(buf.feed(b"PING :ser").is_empty());
    /// let lines = buf.feed(b"ver\r\nPI");
    /// assert_eq!(lines, vec![&b"PING :server"[..]]);
    /// assert_eq!(buf.pending(), b"PI");
    /// ```
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Bytes> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(line) = self.codec.split_line(&mut self.pending) {
            lines.push(line);
        }
        lines
    }

    /// Bytes held back until their delimiter arrives.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Discard the pending fragment, e.g. when the transport is replaced.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.codec = LineCodec::new();
    }
}
