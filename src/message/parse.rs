//! Nom-based IRC message parser.
//!
//! Grammar accepted by [`Message::parse`]:
//!
//! ```text
//! [':' prefix SP+] command (SP+ middle)* [SP+ ':' trailing] SP*
//! command  = 3DIGIT / 1*LETTER
//! middle   = first char not ':', no SP / NUL / CR / LF
//! trailing = anything but NUL / CR / LF, spaces included
//! ```

use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1, take_while_m_n},
    character::complete::char,
    combinator::eof,
    error::{context, VerboseError, VerboseErrorKind},
    sequence::{preceded, terminated},
    IResult,
};

use super::Message;
use crate::error::{MessageParseError, ProtocolError};

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

fn is_forbidden(c: char) -> bool {
    matches!(c, '\0' | '\r' | '\n')
}

fn spaces0(input: &str) -> ParseResult<&str, &str> {
    take_while(|c: char| c == ' ')(input)
}

fn spaces1(input: &str) -> ParseResult<&str, &str> {
    take_while1(|c: char| c == ' ')(input)
}

/// Parse message prefix (the part after `:` and before the first space).
fn parse_prefix(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message prefix",
        terminated(
            preceded(char(':'), take_while1(|c: char| c != ' ' && !is_forbidden(c))),
            spaces1,
        ),
    )(input)
}

/// Parse the command: exactly three digits or a run of ASCII letters.
fn parse_command(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing IRC command",
        alt((
            take_while_m_n(3, 3, |c: char| c.is_ascii_digit()),
            take_while1(|c: char| c.is_ascii_alphabetic()),
        )),
    )(input)
}

/// Parse a middle argument. The caller routes `:`-led tokens to the trailing parser.
fn parse_middle(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing middle argument",
        take_while1(|c: char| c != ' ' && !is_forbidden(c)),
    )(input)
}

/// Parse the trailing argument, which runs to the end of the line.
fn parse_trailing(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing trailing argument",
        terminated(preceded(char(':'), take_while(|c: char| !is_forbidden(c))), eof),
    )(input)
}

fn unexpected<'a>(input: &'a str, ctx: &'static str) -> nom::Err<VerboseError<&'a str>> {
    nom::Err::Error(VerboseError {
        errors: vec![(input, VerboseErrorKind::Context(ctx))],
    })
}

/// Parse a complete line into `(prefix, command, args)`.
fn parse_line(input: &str) -> ParseResult<&str, (Option<&str>, &str, Vec<&str>)> {
    let (input, _) = spaces0(input)?;
    let (input, prefix) = if input.starts_with(':') {
        let (input, prefix) = parse_prefix(input)?;
        (input, Some(prefix))
    } else {
        (input, None)
    };
    let (mut rest, command) = parse_command(input)?;

    let mut args = Vec::new();
    loop {
        let (after, gap) = spaces0(rest)?;
        if after.is_empty() {
            rest = after;
            break;
        }
        if gap.is_empty() {
            // Glued to the previous token, e.g. `PRIVMSG1` or an embedded NUL.
            return Err(unexpected(after, "expecting a space between tokens"));
        }
        if after.starts_with(':') {
            let (after, trailing) = parse_trailing(after)?;
            args.push(trailing);
            rest = after;
            break;
        }
        let (after, middle) = parse_middle(after)?;
        args.push(middle);
        rest = after;
    }

    Ok((rest, (prefix, command, args)))
}

/// Convert a nom failure into a positioned error, keeping the innermost context.
fn to_parse_error(input: &str, err: nom::Err<VerboseError<&str>>) -> MessageParseError {
    let errors = match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e.errors,
        nom::Err::Incomplete(_) => {
            return MessageParseError::ParseContext {
                position: input.len(),
                context: "incomplete input",
            }
        }
    };

    let mut position = input.len();
    let mut context_info = "parsing IRC message";
    for (error_input, kind) in errors.iter().rev() {
        position = input.len() - error_input.len();
        if let VerboseErrorKind::Context(ctx) = kind {
            context_info = *ctx;
        }
    }

    match context_info {
        "parsing message prefix" => MessageParseError::InvalidPrefix,
        "parsing IRC command" => {
            let token = input[position..].split(' ').next().unwrap_or_default();
            MessageParseError::InvalidCommand(token.to_owned())
        }
        ctx => MessageParseError::ParseContext {
            position,
            context: ctx,
        },
    }
}

impl Message {
    /// Parse one IRC line, without its CRLF delimiter.
    ///
    /// Surrounding spaces are tolerated and runs of spaces between tokens
    /// are collapsed. A trailing CR/LF is ignored. An empty trailing
    /// argument (`TOPIC #c :`) is kept as `""` rather than dropped, so
    /// rendering the result gives back an equivalent line.
    ///
    /// ```
    /// use slirc_client::Message;
    ///
    /// let msg = Message::parse(":irc.example.net 372 bob :Message of the day line").unwrap();
    /// assert_eq!(msg.prefix(), Some("irc.example.net"));
    /// assert_eq!(msg.command(), "RPL_MOTD");
    /// assert_eq!(msg.numeric(), Some("372"));
    /// assert_eq!(msg.args(), ["bob", "Message of the day line"]);
    /// ```
    pub fn parse(line: &str) -> Result<Self, MessageParseError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim_start_matches(' ').is_empty() {
            return Err(MessageParseError::EmptyMessage);
        }

        let (_, (prefix, command, args)) =
            parse_line(line).map_err(|e| to_parse_error(line, e))?;

        Ok(Message::from_validated(
            prefix.map(str::to_owned),
            command,
            args.into_iter().map(str::to_owned).collect(),
        ))
    }
}

impl FromStr for Message {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Message::parse(s).map_err(|cause| ProtocolError::Malformed {
            line: s.to_owned(),
            cause,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_command() {
        let msg = Message::parse("PING").unwrap();
        assert_eq!(msg.command(), "PING");
        assert!(msg.prefix().is_none());
        assert!(msg.args().is_empty());
    }

    #[test]
    fn test_parse_command_with_params() {
        let msg = Message::parse("PRIVMSG #channel :Hello, world!").unwrap();
        assert_eq!(msg.command(), "PRIVMSG");
        assert_eq!(msg.args(), ["#channel", "Hello, world!"]);
    }

    #[test]
    fn test_parse_with_prefix() {
        let msg = Message::parse(":nick!user@host PRIVMSG #channel :Hello").unwrap();
        assert_eq!(msg.prefix(), Some("nick!user@host"));
        assert_eq!(msg.command(), "PRIVMSG");
        assert_eq!(msg.args(), ["#channel", "Hello"]);
    }

    #[test]
    fn test_parse_motd_numeric() {
        let msg = Message::parse(":irc.example.net 372 bob :Message of the day line").unwrap();
        assert_eq!(msg.prefix(), Some("irc.example.net"));
        assert_eq!(msg.command(), "RPL_MOTD");
        assert_eq!(msg.numeric(), Some("372"));
        assert_eq!(msg.args(), ["bob", "Message of the day line"]);
    }

    #[test]
    fn test_parse_unknown_numeric() {
        let msg = Message::parse(":server 999 bob :odd").unwrap();
        assert_eq!(msg.command(), "999");
        assert_eq!(msg.numeric(), None);
    }

    #[test]
    fn test_parse_multiple_params() {
        let msg = Message::parse("USER guest 0 * :Real Name").unwrap();
        assert_eq!(msg.args(), ["guest", "0", "*", "Real Name"]);
    }

    #[test]
    fn test_parse_collapses_spaces() {
        let msg = Message::parse("  :srv   MODE   #c  +o    bob   ").unwrap();
        assert_eq!(msg.prefix(), Some("srv"));
        assert_eq!(msg.command(), "MODE");
        assert_eq!(msg.args(), ["#c", "+o", "bob"]);
    }

    #[test]
    fn test_parse_trailing_keeps_inner_spaces() {
        let msg = Message::parse("PRIVMSG #c :  spaced  out  ").unwrap();
        assert_eq!(msg.args(), ["#c", "  spaced  out  "]);
    }

    #[test]
    fn test_parse_empty_trailing() {
        let msg = Message::parse("PRIVMSG #channel :").unwrap();
        assert_eq!(msg.args(), ["#channel", ""]);
    }

    #[test]
    fn test_parse_colon_inside_middle() {
        let msg = Message::parse("NOTICE a:b :c").unwrap();
        assert_eq!(msg.args(), ["a:b", "c"]);
    }

    #[test]
    fn test_parse_with_crlf() {
        let msg = Message::parse("PING :server\r\n").unwrap();
        assert_eq!(msg.command(), "PING");
        assert_eq!(msg.args(), ["server"]);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Message::parse(""), Err(MessageParseError::EmptyMessage));
        assert_eq!(Message::parse("   "), Err(MessageParseError::EmptyMessage));
    }

    #[test]
    fn test_parse_bad_command() {
        assert!(matches!(
            Message::parse("12 foo"),
            Err(MessageParseError::InvalidCommand(_))
        ));
        assert!(Message::parse("1234 foo").is_err());
        assert!(Message::parse("PRIVMSG1 foo").is_err());
        assert!(Message::parse("RPL_MOTD foo").is_err());
    }

    #[test]
    fn test_parse_bad_prefix() {
        assert_eq!(Message::parse(":server"), Err(MessageParseError::InvalidPrefix));
        assert_eq!(Message::parse(": PING"), Err(MessageParseError::InvalidPrefix));
    }

    #[test]
    fn test_parse_rejects_control_chars() {
        assert!(Message::parse("PRIVMSG #a\0b :x").is_err());
        assert!(Message::parse("PRIVMSG #a :x\0y").is_err());
        assert!(Message::parse("PRIVMSG #a :x\ry").is_err());
    }

    #[test]
    fn test_from_str_wraps_error() {
        let err = "".parse::<Message>().unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed { .. }));
        let msg: Message = "PONG :abc".parse().unwrap();
        assert_eq!(msg.last_arg(), Some("abc"));
    }
}
