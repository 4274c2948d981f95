//! Integration tests for message parsing and rendering
//!
//! These tests verify that messages parsed from wire text render back to
//! lines that parse into the same message.

use slirc_client::{Message, MessageParseError, ProtocolError};

fn round_trip(original: &str) -> Message {
    let message: Message = original.parse().expect("Failed to parse message");
    let rendered = message.render();
    let reparsed: Message = rendered.parse().expect("Failed to reparse message");
    assert_eq!(message, reparsed, "{original:?} rendered as {rendered:?}");
    message
}

#[test]
fn test_message_round_trip_simple() {
    let message = round_trip("PING :irc.example.com");
    assert_eq!(message.render(), "PING irc.example.com");
}

#[test]
fn test_message_round_trip_with_prefix() {
    let message = round_trip(":nick!user@host PRIVMSG #channel :Hello, world!");
    assert_eq!(message.render(), ":nick!user@host PRIVMSG #channel :Hello, world!");
}

#[test]
fn test_message_round_trip_numeric_response() {
    let message = round_trip(":server 001 nickname :Welcome to the IRC Network");
    assert_eq!(message.command(), "RPL_WELCOME");
    assert_eq!(message.numeric(), Some("001"));
}

#[test]
fn test_message_round_trip_unknown_numeric() {
    let message = round_trip(":server 999 nickname :mystery");
    assert_eq!(message.command(), "999");
    assert_eq!(message.numeric(), None);
}

#[test]
fn test_message_round_trip_many_middles() {
    let message = round_trip(":srv 353 bob = #rust :alice bob carol");
    assert_eq!(message.command(), "RPL_NAMREPLY");
    assert_eq!(message.args(), ["bob", "=", "#rust", "alice bob carol"]);
}

#[test]
fn test_message_round_trip_empty_trailing() {
    let message = round_trip("TOPIC #rust :");
    assert_eq!(message.args(), ["#rust", ""]);
}

#[test]
fn test_motd_line() {
    let message: Message = ":irc.example.net 372 bob :Message of the day line"
        .parse()
        .unwrap();
    assert_eq!(message.prefix(), Some("irc.example.net"));
    assert_eq!(message.command(), "RPL_MOTD");
    assert_eq!(message.numeric(), Some("372"));
    assert_eq!(message.args(), ["bob", "Message of the day line"]);
}

#[test]
fn test_admin_location_numerics() {
    let message = round_trip(":srv 257 bob :Location");
    assert_eq!(message.command(), "RPL_ADMINLOC1");
    assert_eq!(message.numeric(), Some("257"));

    let message = round_trip(":srv 258 bob :Second line");
    assert_eq!(message.command(), "RPL_ADMINLOC2");
    assert_eq!(message.numeric(), Some("258"));
}

#[test]
fn test_message_construction_and_parsing() {
    let message = Message::new("PRIVMSG", ["#test", "Integration test message"])
        .unwrap()
        .with_prefix("testbot!test@example.com")
        .unwrap();

    let serialized = message.to_string();
    let parsed: Message = serialized
        .parse()
        .expect("Failed to parse constructed message");

    assert_eq!(message, parsed);
    assert_eq!(parsed.prefix(), Some("testbot!test@example.com"));
}

#[test]
fn test_malformed_lines() {
    for line in ["", ":onlyprefix", "PRIV_MSG x", "1234 x", "PRIVMSG #a :b\0c"] {
        let err = line.parse::<Message>().unwrap_err();
        assert!(
            matches!(err, ProtocolError::Malformed { .. }),
            "{line:?} gave {err:?}"
        );
    }
    assert_eq!(Message::parse(""), Err(MessageParseError::EmptyMessage));
}
