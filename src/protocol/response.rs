//! Response definitions
//!
//! Represents the result of executing a command.

use std::fmt;
use std::str::FromStr;

use crate::error::KvError;

/// Error codes reported to clients as `ERROR <CODE>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Required key or value absent
    MissingArguments,

    /// GET/DELETE referencing an absent key
    KeyNotFound,

    /// Unrecognized verb
    InvalidCommand,
}

impl ErrorCode {
    /// Wire name of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingArguments => "MISSING_ARGUMENTS",
            ErrorCode::KeyNotFound => "KEY_NOT_FOUND",
            ErrorCode::InvalidCommand => "INVALID_COMMAND",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = KvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MISSING_ARGUMENTS" => Ok(ErrorCode::MissingArguments),
            "KEY_NOT_FOUND" => Ok(ErrorCode::KeyNotFound),
            "INVALID_COMMAND" => Ok(ErrorCode::InvalidCommand),
            other => Err(KvError::Protocol(format!("Unknown error code: {}", other))),
        }
    }
}

/// A response to send to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Success, with the value for GET or the flag for EXISTS
    Ok(Option<Vec<u8>>),

    /// Failure reported in-band
    Error(ErrorCode),
}

impl Response {
    /// Create an OK response without payload
    pub fn ok() -> Self {
        Response::Ok(None)
    }

    /// Create an OK response carrying `payload`
    pub fn ok_with(payload: impl Into<Vec<u8>>) -> Self {
        Response::Ok(Some(payload.into()))
    }

    /// Create an ERROR response
    pub fn error(code: ErrorCode) -> Self {
        Response::Error(code)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok(_))
    }
}
