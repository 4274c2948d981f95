//! # slirc-client
//!
//! Client-side engine for the line-oriented IRC protocol: it turns the raw
//! byte stream of one connection into structured messages and renders
//! messages back into wire bytes.
//!
//! ## Features
//!
//! - CRLF framing that survives arbitrary read boundaries
//! - Message parsing and rendering with optional prefix and trailing argument
//! - Numeric replies normalized to symbolic names (`372` → `RPL_MOTD`)
//! - Configurable wire charset, strict in both directions
//! - Optional Tokio connection lifecycle: automatic `PING` replies,
//!   registration tracking and an ordered dispatch queue
//!
//! ## Quick Start
//!
//! ```rust
//! use slirc_client::Message;
//!
//! let msg: Message = ":irc.example.net 372 bob :Message of the day line"
//!     .parse()
//!     .expect("Valid IRC message");
//! assert_eq!(msg.command(), "RPL_MOTD");
//! assert_eq!(msg.numeric(), Some("372"));
//!
//! let reply = Message::new("PRIVMSG", ["#rust", "Hello, world!"]).unwrap();
//! assert_eq!(reply.to_string(), "PRIVMSG #rust :Hello, world!");
//! ```

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod charset;
pub mod config;
pub mod error;
pub mod line;
pub mod message;
pub mod numeric;
pub mod state;

#[cfg(feature = "tokio")]
pub mod connection;
#[cfg(feature = "tokio")]
pub mod queue;

pub use self::charset::Charset;
pub use self::config::ConnectionConfig;
pub use self::error::{MessageParseError, ProtocolError};
pub use self::line::{LineBuffer, LineCodec};
pub use self::message::Message;
pub use self::numeric::NumericKind;
pub use self::state::ConnectionState;

#[cfg(feature = "tokio")]
pub use self::connection::{connect, CloseReason, Connection, ConnectionHandle};
#[cfg(feature = "tokio")]
pub use self::queue::{dispatch_channel, DispatchQueue, DispatchSender};
