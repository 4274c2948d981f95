//! Error types for the IRC client protocol engine.
//!
//! Line-level failures ([`ProtocolError::Malformed`], [`ProtocolError::Decode`])
//! are recovered by the connection: the offending line is logged and dropped.
//! Transport-level failures ([`ProtocolError::ConnectionLost`]) always
//! propagate to the caller, which owns the reconnection policy.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A decoded line did not match the message grammar.
    #[error("malformed message: {line:?}")]
    Malformed {
        /// The decoded line.
        line: String,
        /// The underlying parse error.
        #[source]
        cause: MessageParseError,
    },

    /// Received bytes are not valid in the configured character set.
    #[error("cannot decode {} bytes as {charset}", .raw.len())]
    Decode {
        /// Name of the configured character set.
        charset: &'static str,
        /// The undecodable line, without its delimiter.
        raw: Vec<u8>,
    },

    /// Outgoing text cannot be represented in the configured character set.
    #[error("cannot encode {text:?} as {charset}")]
    Encode {
        /// Name of the configured character set.
        charset: &'static str,
        /// The rendered line.
        text: String,
    },

    /// An outgoing message breaks the message invariants.
    #[error("invalid message: {0}")]
    InvalidMessage(#[from] MessageParseError),

    /// The configured character set label is not recognised.
    #[error("unknown charset: {0}")]
    UnknownCharset(String),

    /// No transport is attached to the connection.
    #[error("not connected")]
    NotConnected,

    /// The transport was closed by the peer or failed.
    #[error("connection lost: {}", describe_loss(.source))]
    ConnectionLost {
        /// The transport error, or `None` when the peer closed the stream.
        source: Option<std::io::Error>,
    },
}

fn describe_loss(source: &Option<std::io::Error>) -> String {
    match source {
        Some(err) => err.to_string(),
        None => "closed by peer".to_owned(),
    }
}

impl ProtocolError {
    /// Whether the error only affects a single line and the connection can
    /// keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ProtocolError::Malformed { .. }
                | ProtocolError::Decode { .. }
                | ProtocolError::Encode { .. }
                | ProtocolError::InvalidMessage(_)
        )
    }
}

/// Errors encountered when parsing or constructing IRC messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Message was empty.
    #[error("empty message")]
    EmptyMessage,

    /// A `:` prefix marker was not followed by a source token and a space.
    #[error("invalid prefix")]
    InvalidPrefix,

    /// Command was neither a run of letters nor exactly three digits.
    #[error("invalid command: {0:?}")]
    InvalidCommand(String),

    /// An argument breaks the message invariants.
    #[error("invalid argument: {0:?}")]
    InvalidArgument(String),

    /// Parsing error with the position it was detected at.
    #[error("parsing failed at position {position}: {context}")]
    ParseContext {
        /// Byte position where parsing failed.
        position: usize,
        /// Description of what was being parsed.
        context: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MessageParseError::ParseContext {
            position: 4,
            context: "parsing IRC command",
        };
        assert_eq!(
            format!("{}", err),
            "parsing failed at position 4: parsing IRC command"
        );

        let err = ProtocolError::Decode {
            charset: "UTF-8",
            raw: vec![0xff, 0xfe],
        };
        assert_eq!(format!("{}", err), "cannot decode 2 bytes as UTF-8");
    }

    #[test]
    fn test_malformed_source_chaining() {
        let cause = MessageParseError::InvalidCommand("1234".to_string());
        let err = ProtocolError::Malformed {
            line: "1234 foo".to_string(),
            cause: cause.clone(),
        };

        let source = std::error::Error::source(&err);
        assert!(source.is_some());
        assert_eq!(source.unwrap().to_string(), cause.to_string());
    }

    #[test]
    fn test_connection_lost_display() {
        let eof = ProtocolError::ConnectionLost { source: None };
        assert_eq!(eof.to_string(), "connection lost: closed by peer");
        assert!(std::error::Error::source(&eof).is_none());

        let reset = ProtocolError::ConnectionLost {
            source: Some(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "reset by peer",
            )),
        };
        assert_eq!(reset.to_string(), "connection lost: reset by peer");
        assert!(std::error::Error::source(&reset).is_some());
    }

    #[test]
    fn test_recoverable() {
        assert!(ProtocolError::Decode {
            charset: "UTF-8",
            raw: vec![]
        }
        .is_recoverable());
        assert!(!ProtocolError::NotConnected.is_recoverable());
        assert!(!ProtocolError::ConnectionLost { source: None }.is_recoverable());
    }

    #[test]
    fn test_invalid_message_conversion() {
        let err: ProtocolError = MessageParseError::InvalidPrefix.into();
        assert!(matches!(err, ProtocolError::InvalidMessage(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_conversion() {
        let io_err =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        let protocol_err: ProtocolError = io_err.into();

        match protocol_err {
            ProtocolError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
