//! Protocol Tests
//!
//! Tests for command parsing and the wire encoding of responses.

use std::io::Cursor;

use linekv::protocol::{
    decode_response, encode_command, encode_response, read_response, write_command,
    write_response, Command, ErrorCode, LineBuffer, Response,
};
use linekv::KvError;

// =============================================================================
// Parser Tests
// =============================================================================

#[test]
fn test_parse_all_verbs() {
    assert!(matches!(Command::parse(b"SET a b"), Command::Set { .. }));
    assert!(matches!(Command::parse(b"GET a"), Command::Get { .. }));
    assert!(matches!(Command::parse(b"DELETE a"), Command::Delete { .. }));
    assert!(matches!(Command::parse(b"EXISTS a"), Command::Exists { .. }));
}

#[test]
fn test_verbs_are_case_sensitive() {
    for line in ["set a b", "Get a", "delete a", "exists a", "DEL a", "SETX a b"] {
        assert_eq!(
            Command::parse(line.as_bytes()),
            Command::Invalid(ErrorCode::InvalidCommand),
            "line {:?}",
            line
        );
    }
}

#[test]
fn test_missing_arguments_per_verb() {
    for line in ["SET", "SET k", "SET k ", "GET", "DELETE", "EXISTS"] {
        assert_eq!(
            Command::parse(line.as_bytes()),
            Command::Invalid(ErrorCode::MissingArguments),
            "line {:?}",
            line
        );
    }
}

#[test]
fn test_set_value_is_rest_of_line() {
    assert_eq!(
        Command::parse(b"SET path /usr/local bin  and more"),
        Command::Set {
            key: b"path".to_vec(),
            value: b"/usr/local bin  and more".to_vec(),
        }
    );
}

#[test]
fn test_verb_names() {
    assert_eq!(Command::parse(b"SET a b").verb(), "SET");
    assert_eq!(Command::parse(b"NOPE").verb(), "INVALID");
}

// =============================================================================
// Error Code Tests
// =============================================================================

#[test]
fn test_error_code_names() {
    assert_eq!(ErrorCode::MissingArguments.to_string(), "MISSING_ARGUMENTS");
    assert_eq!(ErrorCode::KeyNotFound.to_string(), "KEY_NOT_FOUND");
    assert_eq!(ErrorCode::InvalidCommand.to_string(), "INVALID_COMMAND");
    assert_eq!(
        "KEY_NOT_FOUND".parse::<ErrorCode>().unwrap(),
        ErrorCode::KeyNotFound
    );
    assert!("key_not_found".parse::<ErrorCode>().is_err());
}

// =============================================================================
// Stream-based I/O Tests
// =============================================================================

#[test]
fn test_write_responses_to_stream() {
    let mut buffer = Vec::new();

    write_response(&mut buffer, &Response::ok()).unwrap();
    write_response(&mut buffer, &Response::ok_with(&b"Alice"[..])).unwrap();
    write_response(&mut buffer, &Response::error(ErrorCode::KeyNotFound)).unwrap();

    assert_eq!(buffer, b"OK\nOK Alice\nERROR KEY_NOT_FOUND\n");
}

#[test]
fn test_every_response_ends_with_one_newline() {
    let responses = [
        Response::ok(),
        Response::ok_with(&b"1"[..]),
        Response::ok_with(&b"a b c"[..]),
        Response::error(ErrorCode::MissingArguments),
        Response::error(ErrorCode::KeyNotFound),
        Response::error(ErrorCode::InvalidCommand),
    ];

    for response in &responses {
        let encoded = encode_response(response);
        assert_eq!(encoded.iter().filter(|b| **b == b'\n').count(), 1);
        assert_eq!(encoded.last(), Some(&b'\n'));
    }
}

#[test]
fn test_read_responses_from_stream() {
    let mut cursor = Cursor::new(b"OK\nOK 0\nERROR INVALID_COMMAND\n".to_vec());

    assert_eq!(read_response(&mut cursor).unwrap(), Response::ok());
    assert_eq!(
        read_response(&mut cursor).unwrap(),
        Response::ok_with(&b"0"[..])
    );
    assert_eq!(
        read_response(&mut cursor).unwrap(),
        Response::error(ErrorCode::InvalidCommand)
    );
    assert!(matches!(read_response(&mut cursor), Err(KvError::Io(_))));
}

#[test]
fn test_written_command_parses_back() {
    let command = Command::Set {
        key: b"greeting".to_vec(),
        value: b"hello there world".to_vec(),
    };
    let mut buffer = Vec::new();
    write_command(&mut buffer, &command).unwrap();

    let mut lines = LineBuffer::new();
    lines.extend(&buffer);
    let line = lines.next_line().unwrap();

    assert_eq!(Command::parse(&line), command);
    assert!(lines.is_empty());
}

#[test]
fn test_encode_invalid_command_fails() {
    assert!(matches!(
        encode_command(&Command::Invalid(ErrorCode::MissingArguments)),
        Err(KvError::Protocol(_))
    ));
}

#[test]
fn test_decode_value_with_spaces() {
    assert_eq!(
        decode_response(b"OK hello there world").unwrap(),
        Response::ok_with(&b"hello there world"[..])
    );
}
