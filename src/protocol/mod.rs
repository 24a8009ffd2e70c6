//! Protocol Module
//!
//! Defines the line-oriented text protocol spoken between clients and the
//! server.
//!
//! ## Request Format
//! One command per line, terminated by `\n`. A `\r` before the `\n` is
//! tolerated and stripped. Verbs are case-sensitive.
//! ```text
//! SET <key> <value with possible spaces>
//! GET <key>
//! DELETE <key>
//! EXISTS <key>
//! ```
//!
//! ## Response Format
//! Exactly one line per non-empty command line, in request order.
//! ```text
//! OK
//! OK <payload>
//! ERROR <CODE>
//! ```
//!
//! ### Error Codes
//! - `MISSING_ARGUMENTS`: key (or SET value) absent
//! - `KEY_NOT_FOUND`: GET/DELETE of an absent key
//! - `INVALID_COMMAND`: unrecognized verb

pub(crate) mod command;
mod response;
mod codec;

pub use command::Command;
pub use response::{ErrorCode, Response};
pub use codec::{
    decode_response, encode_command, encode_response, read_response, write_command,
    write_response, LineBuffer, LINE_TERMINATOR,
};
