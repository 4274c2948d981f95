//! IRC numeric reply normalization.
//!
//! Servers answer with three-digit numerics whose meaning is only documented
//! externally. This module maps them to stable symbolic names such as
//! `RPL_WELCOME` or `ERR_NICKNAMEINUSE`.
//!
//! The mapping is built once on first use and is read-only afterwards.
//! Codes missing from the table are a lookup miss, never an error.
//!
//! # Reference
//! - <https://www.alien.net.au/irc/irc2numerics.html>

use std::collections::HashMap;
use std::sync::OnceLock;

mod table;

/// Symbolic name of the registration acknowledgment (`001`).
pub const RPL_WELCOME: &str = "RPL_WELCOME";

static LOOKUP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn numerics() -> &'static HashMap<&'static str, &'static str> {
    LOOKUP.get_or_init(|| table::NUMERICS.iter().copied().collect())
}

/// Returns `true` if `token` has the shape of a numeric: exactly three ASCII digits.
#[inline]
pub fn is_numeric(token: &str) -> bool {
    token.len() == 3 && token.bytes().all(|b| b.is_ascii_digit())
}

/// Looks up the symbolic name of a three-digit numeric code.
///
/// ```
/// use slirc_client::numeric;
///
/// assert_eq!(numeric::lookup("372"), Some("RPL_MOTD"));
/// assert_eq!(numeric::lookup("998"), None);
/// ```
pub fn lookup(code: &str) -> Option<&'static str> {
    numerics().get(code).copied()
}

/// Number of known numerics.
pub fn len() -> usize {
    numerics().len()
}

/// Iterates over every known `(code, name)` pair in ascending code order.
pub fn iter() -> impl Iterator<Item = (&'static str, &'static str)> {
    table::NUMERICS.iter().copied()
}

/// Broad classification of a known numeric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Informational or command reply (`RPL_*`).
    Reply,
    /// Error reply (`ERR_*`).
    Error,
}

impl NumericKind {
    /// Classifies a symbolic name by its conventional prefix.
    pub fn of_name(name: &str) -> Option<Self> {
        if name.starts_with("RPL_") {
            Some(NumericKind::Reply)
        } else if name.starts_with("ERR_") {
            Some(NumericKind::Error)
        } else {
            None
        }
    }

    /// Classifies a three-digit code, if it is known.
    pub fn of_code(code: &str) -> Option<Self> {
        lookup(code).and_then(Self::of_name)
    }
}
