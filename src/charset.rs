//! Character set handling for the wire.
//!
//! IRC has no agreed encoding, so the connection is configured with one
//! label (resolved through `encoding_rs`) that governs both decoding of
//! received lines and encoding of outgoing ones. Both directions are
//! strict: malformed input or unmappable output is an error, never a
//! silent replacement.

use std::borrow::Cow;

use encoding::Encoding;

use crate::error::{ProtocolError, Result};

/// A character set fixed for the lifetime of a connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Charset {
    encoding: &'static Encoding,
}

impl Charset {
    /// Resolve an encoding label such as `"utf-8"`, `"utf8"` or `"latin1"`.
    pub fn for_label(label: &str) -> Result<Self> {
        Encoding::for_label(label.trim().as_bytes())
            .map(|encoding| Self { encoding })
            .ok_or_else(|| ProtocolError::UnknownCharset(label.to_owned()))
    }

    /// Canonical name of the character set.
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode one received line.
    pub fn decode<'a>(&self, raw: &'a [u8]) -> Result<Cow<'a, str>> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(raw)
            .ok_or_else(|| ProtocolError::Decode {
                charset: self.name(),
                raw: raw.to_vec(),
            })
    }

    /// Encode one outgoing line.
    pub fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>> {
        let (bytes, _, had_errors) = self.encoding.encode(text);
        if had_errors {
            return Err(ProtocolError::Encode {
                charset: self.name(),
                text: text.to_owned(),
            });
        }
        Ok(bytes)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            encoding: encoding::UTF_8,
        }
    }
}
