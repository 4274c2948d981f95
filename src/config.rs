//! Connection configuration.

use crate::charset::Charset;
use crate::error::Result;

/// Default size of a single transport read.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 4096;

/// Settings consumed by a [`Connection`](crate::connection::Connection).
///
/// Everything else (server address, nickname, plugins) belongs to the
/// caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConnectionConfig {
    /// Readable name used in log records.
    pub name: String,
    /// Encoding label for both directions of the wire, e.g. `"utf-8"`.
    pub charset: String,
    /// Size of each read from the transport.
    pub read_buffer_size: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            name: "irc".to_string(),
            charset: "utf-8".to_string(),
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}

impl ConnectionConfig {
    /// Set the readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the encoding label.
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Set the read size. Zero is bumped to one byte.
    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size.max(1);
        self
    }

    /// Resolve the configured encoding label.
    pub fn resolve_charset(&self) -> Result<Charset> {
        Charset::for_label(&self.charset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;

    #[test]
    fn test_defaults() {
        let config = ConnectionConfig::default();
        assert_eq!(config.name, "irc");
        assert_eq!(config.read_buffer_size, DEFAULT_READ_BUFFER_SIZE);
        assert_eq!(config.resolve_charset().unwrap().name(), "UTF-8");
    }

    #[test]
    fn test_builder() {
        let config = ConnectionConfig::default()
            .with_name("libera")
            .with_charset("latin1")
            .with_read_buffer_size(0);
        assert_eq!(config.name, "libera");
        assert_eq!(config.read_buffer_size, 1);
        assert_eq!(config.resolve_charset().unwrap().name(), "windows-1252");
    }

    #[test]
    fn test_bad_charset() {
        let config = ConnectionConfig::default().with_charset("nope");
        assert!(matches!(
            config.resolve_charset(),
            Err(ProtocolError::UnknownCharset(_))
        ));
    }
}
