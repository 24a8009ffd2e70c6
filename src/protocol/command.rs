//! Command definitions
//!
//! Parses a single protocol line into a command.

use super::ErrorCode;

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert or update a key
    Set { key: Vec<u8>, value: Vec<u8> },

    /// Get a value by key
    Get { key: Vec<u8> },

    /// Delete a key
    Delete { key: Vec<u8> },

    /// Check whether a key is present
    Exists { key: Vec<u8> },

    /// A line that could not be turned into a command.
    ///
    /// Carries `MissingArguments` or `InvalidCommand`.
    Invalid(ErrorCode),
}

impl Command {
    /// Parse one line (without its `\n` or trailing `\r`).
    ///
    /// The verb and key are whitespace-delimited tokens. For SET the rest of
    /// the line after the key, minus one separating space, is the value and
    /// is kept verbatim. Tokens after the key of the other verbs are ignored.
    pub fn parse(line: &[u8]) -> Command {
        let (verb, rest) = next_token(line);
        let (key, rest) = next_token(rest);

        match verb {
            b"SET" => {
                let value = rest.strip_prefix(b" ").unwrap_or(rest);
                if key.is_empty() || value.is_empty() {
                    return Command::Invalid(ErrorCode::MissingArguments);
                }
                Command::Set {
                    key: key.to_vec(),
                    value: value.to_vec(),
                }
            }
            b"GET" => with_key(key, |key| Command::Get { key }),
            b"DELETE" => with_key(key, |key| Command::Delete { key }),
            b"EXISTS" => with_key(key, |key| Command::Exists { key }),
            _ => Command::Invalid(ErrorCode::InvalidCommand),
        }
    }

    /// The verb as it appears on the wire, for logging
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Set { .. } => "SET",
            Command::Get { .. } => "GET",
            Command::Delete { .. } => "DELETE",
            Command::Exists { .. } => "EXISTS",
            Command::Invalid(_) => "INVALID",
        }
    }
}

fn with_key(key: &[u8], build: impl FnOnce(Vec<u8>) -> Command) -> Command {
    if key.is_empty() {
        Command::Invalid(ErrorCode::MissingArguments)
    } else {
        build(key.to_vec())
    }
}

/// Token separator: ASCII whitespace plus vertical tab (C `isspace`)
pub(crate) fn is_separator(byte: &u8) -> bool {
    byte.is_ascii_whitespace() || *byte == 0x0B
}

/// Split off the next whitespace-delimited token.
///
/// Returns `(token, rest)`; `rest` starts at the whitespace that ended the
/// token. The token is empty when the input holds only whitespace.
fn next_token(input: &[u8]) -> (&[u8], &[u8]) {
    let start = input
        .iter()
        .position(|b| !is_separator(b))
        .unwrap_or(input.len());
    let input = &input[start..];
    let end = input
        .iter()
        .position(is_separator)
        .unwrap_or(input.len());
    input.split_at(end)
}
