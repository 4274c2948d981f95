//! IRC message type, parser and renderer.

mod parse;
mod serialize;
mod types;

pub use self::types::Message;
