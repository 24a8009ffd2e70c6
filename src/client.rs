//! Client Module
//!
//! Blocking TCP client for a linekv server.
//!
//! Arguments are checked before anything is sent: the protocol cannot
//! carry an empty key or value, whitespace in a key, or a newline in a
//! value.

use std::io::{BufReader, BufWriter};
use std::net::{TcpStream, ToSocketAddrs};

use crate::error::{KvError, Result};
use crate::protocol::command::is_separator;
use crate::protocol::{read_response, write_command, Command, ErrorCode, Response};

/// A connection to a linekv server
pub struct Client {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
    peer_addr: String,
}

impl Client {
    /// Connect to a server
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        tracing::debug!("Connected to {}", peer_addr);

        let read_stream = stream.try_clone()?;
        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(stream),
            peer_addr,
        })
    }

    /// Store a key-value pair
    pub fn set(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        validate_key(key)?;
        validate_value(value)?;

        let command = Command::Set {
            key: key.to_vec(),
            value: value.to_vec(),
        };
        match self.request(&command)? {
            Response::Ok(_) => Ok(()),
            Response::Error(code) => Err(KvError::Server(code)),
        }
    }

    /// Retrieve a value, `None` if the key does not exist
    pub fn get(&mut self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;

        match self.request(&Command::Get { key: key.to_vec() })? {
            Response::Ok(Some(value)) => Ok(Some(value)),
            Response::Ok(None) => Err(KvError::Protocol(
                "GET reply carried no value".to_string(),
            )),
            Response::Error(ErrorCode::KeyNotFound) => Ok(None),
            Response::Error(code) => Err(KvError::Server(code)),
        }
    }

    /// Delete a key, returning whether it existed
    pub fn delete(&mut self, key: &[u8]) -> Result<bool> {
        validate_key(key)?;

        match self.request(&Command::Delete { key: key.to_vec() })? {
            Response::Ok(_) => Ok(true),
            Response::Error(ErrorCode::KeyNotFound) => Ok(false),
            Response::Error(code) => Err(KvError::Server(code)),
        }
    }

    /// Check whether a key exists
    pub fn exists(&mut self, key: &[u8]) -> Result<bool> {
        validate_key(key)?;

        match self.request(&Command::Exists { key: key.to_vec() })? {
            Response::Ok(Some(flag)) if flag == b"1" => Ok(true),
            Response::Ok(Some(flag)) if flag == b"0" => Ok(false),
            Response::Ok(other) => Err(KvError::Protocol(format!(
                "EXISTS reply is not a flag: {:?}",
                other.map(|v| String::from_utf8_lossy(&v).into_owned())
            ))),
            Response::Error(code) => Err(KvError::Server(code)),
        }
    }

    /// Get the server address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    /// Send one command and wait for its response line
    fn request(&mut self, command: &Command) -> Result<Response> {
        tracing::trace!("Sending {} to {}", command.verb(), self.peer_addr);
        write_command(&mut self.writer, command)?;
        let response = read_response(&mut self.reader)?;
        tracing::trace!("Reply from {}: {:?}", self.peer_addr, response);
        Ok(response)
    }
}

fn validate_key(key: &[u8]) -> Result<()> {
    if key.is_empty() {
        return Err(KvError::InvalidArgument("key must not be empty".to_string()));
    }
    if key.iter().any(is_separator) {
        return Err(KvError::InvalidArgument(
            "key must not contain whitespace".to_string(),
        ));
    }
    Ok(())
}

fn validate_value(value: &[u8]) -> Result<()> {
    if value.is_empty() {
        return Err(KvError::InvalidArgument("value must not be empty".to_string()));
    }
    if value.contains(&b'\n') {
        return Err(KvError::InvalidArgument(
            "value must not contain a newline".to_string(),
        ));
    }
    // The server strips one trailing carriage return from every line
    if value.last() == Some(&b'\r') {
        return Err(KvError::InvalidArgument(
            "value must not end with a carriage return".to_string(),
        ));
    }
    Ok(())
}
