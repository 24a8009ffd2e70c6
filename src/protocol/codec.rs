//! Protocol codec
//!
//! Line framing plus encoding and decoding of commands and responses.
//!
//! ## Wire Format
//! ```text
//! ┌──────────────────────────────────────┬──────┐
//! │ Text (no \n, optional trailing \r)   │  \n  │
//! └──────────────────────────────────────┴──────┘
//! ```
//! There is no length prefix; the newline is the only frame boundary.

use std::io::{self, BufRead, Write};

use bytes::BytesMut;

use super::{Command, ErrorCode, Response};
use crate::error::{KvError, Result};

/// Terminates every command and response line
pub const LINE_TERMINATOR: u8 = b'\n';

const OK_PREFIX: &[u8] = b"OK";
const ERROR_PREFIX: &[u8] = b"ERROR ";

// =============================================================================
// Line Framing
// =============================================================================

/// Accumulates raw bytes from a stream and yields complete lines.
///
/// Data after the last `\n` stays buffered until more bytes arrive, so a
/// command split across reads is reassembled rather than dropped.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buffer: BytesMut,

    /// Bytes already searched for a terminator
    scanned: usize,
}

impl LineBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
            scanned: 0,
        }
    }

    /// Append bytes read from the stream
    pub fn extend(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Take the next complete line, without `\n` and an optional `\r`
    pub fn next_line(&mut self) -> Option<BytesMut> {
        let offset = self.buffer[self.scanned..]
            .iter()
            .position(|b| *b == LINE_TERMINATOR);

        match offset {
            Some(i) => {
                let end = self.scanned + i;
                let mut line = self.buffer.split_to(end + 1);
                line.truncate(end);
                if line.last() == Some(&b'\r') {
                    line.truncate(end - 1);
                }
                self.scanned = 0;
                Some(line)
            }
            None => {
                self.scanned = self.buffer.len();
                None
            }
        }
    }

    /// Number of buffered bytes not yet terminated by `\n`
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response as a single `\n`-terminated line
pub fn encode_response(response: &Response) -> Vec<u8> {
    match response {
        Response::Ok(None) => b"OK\n".to_vec(),
        Response::Ok(Some(payload)) => {
            let mut line = Vec::with_capacity(OK_PREFIX.len() + payload.len() + 2);
            line.extend_from_slice(OK_PREFIX);
            line.push(b' ');
            line.extend_from_slice(payload);
            line.push(LINE_TERMINATOR);
            line
        }
        Response::Error(code) => {
            let code = code.as_str().as_bytes();
            let mut line = Vec::with_capacity(ERROR_PREFIX.len() + code.len() + 1);
            line.extend_from_slice(ERROR_PREFIX);
            line.extend_from_slice(code);
            line.push(LINE_TERMINATOR);
            line
        }
    }
}

/// Decode a response line (terminator already removed)
pub fn decode_response(line: &[u8]) -> Result<Response> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    if line == OK_PREFIX {
        return Ok(Response::ok());
    }

    if let Some(payload) = line.strip_prefix(b"OK ") {
        return Ok(Response::ok_with(payload));
    }

    if let Some(code) = line.strip_prefix(ERROR_PREFIX) {
        let code = std::str::from_utf8(code)
            .map_err(|_| KvError::Protocol("Error code is not valid UTF-8".to_string()))?;
        return Ok(Response::error(code.parse::<ErrorCode>()?));
    }

    Err(KvError::Protocol(format!(
        "Unrecognized response line: {:?}",
        String::from_utf8_lossy(line)
    )))
}

// =============================================================================
// Command Encoding
// =============================================================================

/// Encode a command as a single `\n`-terminated line
///
/// `Command::Invalid` has no wire form and is rejected.
pub fn encode_command(command: &Command) -> Result<Vec<u8>> {
    let (verb, key, value): (&[u8], &[u8], Option<&[u8]>) = match command {
        Command::Set { key, value } => (&b"SET"[..], key.as_slice(), Some(value.as_slice())),
        Command::Get { key } => (&b"GET"[..], key.as_slice(), None),
        Command::Delete { key } => (&b"DELETE"[..], key.as_slice(), None),
        Command::Exists { key } => (&b"EXISTS"[..], key.as_slice(), None),
        Command::Invalid(code) => {
            return Err(KvError::Protocol(format!(
                "Cannot encode invalid command ({})",
                code
            )))
        }
    };

    let value_len = value.map(|v| v.len() + 1).unwrap_or(0);
    let mut line = Vec::with_capacity(verb.len() + key.len() + value_len + 2);
    line.extend_from_slice(verb);
    line.push(b' ');
    line.extend_from_slice(key);
    if let Some(value) = value {
        line.push(b' ');
        line.extend_from_slice(value);
    }
    line.push(LINE_TERMINATOR);

    Ok(line)
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Write a response to a stream and flush it
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    writer.write_all(&encode_response(response))?;
    writer.flush()?;
    Ok(())
}

/// Write a command to a stream and flush it
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    let bytes = encode_command(command)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Read one response line from a stream
///
/// Blocks until a full line is received. A stream that ends before the
/// terminator yields an `UnexpectedEof` I/O error.
pub fn read_response<R: BufRead>(reader: &mut R) -> Result<Response> {
    let mut line = Vec::new();
    reader.read_until(LINE_TERMINATOR, &mut line)?;

    if line.pop() != Some(LINE_TERMINATOR) {
        return Err(KvError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "connection closed before a full response line was received",
        )));
    }

    decode_response(&line)
}
