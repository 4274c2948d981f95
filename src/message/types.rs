//! Core message type.

use crate::error::MessageParseError;
use crate::numeric::{self, NumericKind};

/// A single IRC message, either received or about to be sent.
///
/// Messages are immutable once constructed. Inbound messages come from
/// [`Message::parse`]; outbound ones from [`Message::new`], which enforces
/// the same invariants the parser does:
///
/// - only the last argument may be empty, contain a space or start with `:`
/// - no argument contains CR, LF or NUL
///
/// A command given as three digits is normalized through the numeric
/// table: `command` becomes the symbolic name and `numeric` keeps the
/// digits. Unknown numerics keep the raw digits as `command` and have no
/// `numeric`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Message {
    pub(super) prefix: Option<String>,
    pub(super) command: String,
    pub(super) numeric: Option<String>,
    pub(super) args: Vec<String>,
}

impl Message {
    /// Build a message from a command and its arguments.
    ///
    /// ```
    /// use slirc_client::Message;
    ///
    /// let msg = Message::new("PRIVMSG", ["#rust", "Hello, world!"]).unwrap();
    /// assert_eq!(msg.render(), "PRIVMSG #rust :Hello, world!");
    ///
    /// let welcome = Message::new("001", ["bob", "Welcome"]).unwrap();
    /// assert_eq!(welcome.command(), "RPL_WELCOME");
    /// assert_eq!(welcome.numeric(), Some("001"));
    /// ```
    pub fn new<C, I, S>(command: C, args: I) -> Result<Self, MessageParseError>
    where
        C: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let command = command.as_ref();
        validate_command(command)?;

        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        validate_args(&args)?;

        Ok(Self::from_validated(None, command, args))
    }

    /// Assemble a message from parts that already satisfy the grammar.
    pub(super) fn from_validated(prefix: Option<String>, command: &str, args: Vec<String>) -> Self {
        let (command, numeric) = match numeric::lookup(command) {
            Some(name) => (name.to_owned(), Some(command.to_owned())),
            None => (command.to_owned(), None),
        };

        Self {
            prefix,
            command,
            numeric,
            args,
        }
    }

    /// Attach an origin prefix, replacing any existing one.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Result<Self, MessageParseError> {
        let prefix = prefix.into();
        if prefix.is_empty() || prefix.contains([' ', '\0', '\r', '\n']) {
            return Err(MessageParseError::InvalidPrefix);
        }
        self.prefix = Some(prefix);
        Ok(self)
    }

    /// Origin of the message (server name or `nick!user@host`), if any.
    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Command name, normalized to a symbolic name for known numerics.
    #[inline]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Original three-digit code of a normalized numeric.
    #[inline]
    pub fn numeric(&self) -> Option<&str> {
        self.numeric.as_deref()
    }

    /// Arguments, the trailing one included.
    #[inline]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Last argument, which is the only one allowed to contain spaces.
    #[inline]
    pub fn last_arg(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }

    /// Whether the command equals `command`, ignoring ASCII case.
    pub fn is(&self, command: &str) -> bool {
        self.command.eq_ignore_ascii_case(command)
    }

    /// Reply/error classification for normalized numerics.
    pub fn numeric_kind(&self) -> Option<NumericKind> {
        self.numeric.as_ref().and_then(|_| NumericKind::of_name(&self.command))
    }
}

fn validate_command(command: &str) -> Result<(), MessageParseError> {
    let letters = !command.is_empty() && command.bytes().all(|b| b.is_ascii_alphabetic());
    if letters || numeric::is_numeric(command) {
        Ok(())
    } else {
        Err(MessageParseError::InvalidCommand(command.to_owned()))
    }
}

fn validate_args(args: &[String]) -> Result<(), MessageParseError> {
    let Some((last, middles)) = args.split_last() else {
        return Ok(());
    };

    for arg in middles {
        if arg.is_empty() || arg.starts_with(':') || arg.contains([' ', '\0', '\r', '\n']) {
            return Err(MessageParseError::InvalidArgument(arg.clone()));
        }
    }

    if last.contains(['\0', '\r', '\n']) {
        return Err(MessageParseError::InvalidArgument(last.clone()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plain_command() {
        let msg = Message::new("JOIN", ["#rust"]).unwrap();
        assert_eq!(msg.command(), "JOIN");
        assert_eq!(msg.numeric(), None);
        assert_eq!(msg.prefix(), None);
        assert_eq!(msg.args(), ["#rust"]);
    }

    #[test]
    fn test_new_normalizes_numeric() {
        let msg = Message::new("433", ["*", "bob", "Nickname is already in use"]).unwrap();
        assert_eq!(msg.command(), "ERR_NICKNAMEINUSE");
        assert_eq!(msg.numeric(), Some("433"));
        assert_eq!(msg.numeric_kind(), Some(NumericKind::Error));
    }

    #[test]
    fn test_new_unknown_numeric() {
        let msg = Message::new("999", ["x"]).unwrap();
        assert_eq!(msg.command(), "999");
        assert_eq!(msg.numeric(), None);
        assert_eq!(msg.numeric_kind(), None);
    }

    #[test]
    fn test_new_rejects_bad_command() {
        assert!(Message::new("", Vec::<String>::new()).is_err());
        assert!(Message::new("PRIV MSG", Vec::<String>::new()).is_err());
        assert!(Message::new("12", Vec::<String>::new()).is_err());
        assert!(Message::new("RPL_MOTD", Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_new_rejects_bad_middle() {
        assert_eq!(
            Message::new("PRIVMSG", ["#a b", "text"]),
            Err(MessageParseError::InvalidArgument("#a b".to_string()))
        );
        assert!(Message::new("PRIVMSG", [":x", "text"]).is_err());
        assert!(Message::new("PRIVMSG", ["", "text"]).is_err());
    }

    #[test]
    fn test_new_rejects_line_breaks() {
        assert!(Message::new("PRIVMSG", ["#a", "hi\r\nQUIT"]).is_err());
        assert!(Message::new("PRIVMSG", ["#a", "nul\0"]).is_err());
    }

    #[test]
    fn test_last_arg_may_be_anything_printable() {
        let msg = Message::new("PRIVMSG", ["#a", ":-) hello there"]).unwrap();
        assert_eq!(msg.last_arg(), Some(":-) hello there"));
        assert!(Message::new("AWAY", [""]).is_ok());
    }

    #[test]
    fn test_with_prefix() {
        let msg = Message::new("PING", ["x"])
            .unwrap()
            .with_prefix("irc.example.net")
            .unwrap();
        assert_eq!(msg.prefix(), Some("irc.example.net"));

        let err = Message::new("PING", ["x"]).unwrap().with_prefix("a b");
        assert_eq!(err, Err(MessageParseError::InvalidPrefix));
    }

    #[test]
    fn test_is() {
        let msg = Message::new("ping", ["x"]).unwrap();
        assert!(msg.is("PING"));
        assert!(!msg.is("PONG"));
    }
}
