//! Connection Handler
//!
//! Handles individual client connections.

use std::io::{self, Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::config::Config;
use crate::dispatcher;
use crate::error::{KvError, Result};
use crate::protocol::{write_response, LineBuffer, Response};
use crate::store::Store;

/// Handles a single client connection
///
/// Lifecycle: read a chunk, answer every complete line in it, read again,
/// until the peer closes the stream or an I/O error occurs.
pub struct Connection<S = TcpStream> {
    /// Underlying byte stream
    stream: S,

    /// Bytes received but not yet terminated by `\n`
    lines: LineBuffer,

    /// Bytes requested per read
    read_buffer_size: usize,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection<TcpStream> {
    /// Create a new connection handler for an accepted socket
    ///
    /// Applies TCP_NODELAY and the configured timeouts.
    pub fn new(stream: TcpStream, config: &Config) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        if config.nodelay {
            stream.set_nodelay(true)?;
        }

        let mut connection = Self::with_stream(stream, peer_addr, config.read_buffer_size);
        connection.set_timeouts(config.read_timeout_ms, config.write_timeout_ms)?;

        Ok(connection)
    }

    /// Configure connection timeouts (0 disables a timeout)
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        self.stream
            .set_read_timeout((read_ms > 0).then(|| Duration::from_millis(read_ms)))?;
        self.stream
            .set_write_timeout((write_ms > 0).then(|| Duration::from_millis(write_ms)))?;
        Ok(())
    }
}

impl<S: Read + Write> Connection<S> {
    /// Wrap an arbitrary byte stream
    pub fn with_stream(stream: S, peer_addr: impl Into<String>, read_buffer_size: usize) -> Self {
        let read_buffer_size = read_buffer_size.max(1);
        Self {
            stream,
            lines: LineBuffer::with_capacity(read_buffer_size),
            read_buffer_size,
            peer_addr: peer_addr.into(),
        }
    }

    /// Handle the connection (blocking until closed)
    ///
    /// Every complete line is answered before the next read, so pipelined
    /// commands get their responses in order. Unterminated input left over
    /// when the peer disconnects is dropped without a response.
    pub fn handle(&mut self, store: &mut Store) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        let mut chunk = vec![0u8; self.read_buffer_size];

        loop {
            while let Some(line) = self.lines.next_line() {
                if line.is_empty() {
                    continue;
                }

                tracing::trace!(
                    "Received from {}: {:?}",
                    self.peer_addr,
                    String::from_utf8_lossy(&line)
                );

                let response = dispatcher::execute_line(store, &line);

                if let Err(e) = self.send_response(&response) {
                    if is_disconnect(&e) {
                        tracing::debug!(
                            "Client {} disconnected before response could be sent: {}",
                            self.peer_addr,
                            e
                        );
                        return Ok(());
                    }
                    tracing::warn!("Error writing to {}: {}", self.peer_addr, e);
                    return Err(e);
                }
            }

            let read = match self.stream.read(&mut chunk) {
                Ok(0) => {
                    if !self.lines.is_empty() {
                        tracing::debug!(
                            "Discarding {} bytes of unterminated input from {}",
                            self.lines.pending(),
                            self.peer_addr
                        );
                    }
                    tracing::debug!("Client {} disconnected", self.peer_addr);
                    return Ok(());
                }
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) if is_disconnect_kind(e.kind()) => {
                    tracing::debug!("Connection to {} ended: {}", self.peer_addr, e);
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
                    return Err(e.into());
                }
            };

            self.lines.extend(&chunk[..read]);
        }
    }

    /// Send a response to the client
    fn send_response(&mut self, response: &Response) -> Result<()> {
        tracing::trace!("Sending to {}: {:?}", self.peer_addr, response);
        write_response(&mut self.stream, response)
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    /// Consume the handler and return the underlying stream
    pub fn into_inner(self) -> S {
        self.stream
    }
}

/// Errors that mean the peer went away (or timed out) rather than a fault
fn is_disconnect_kind(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::UnexpectedEof
            // Read timeout; Windows reports TimedOut instead of WouldBlock
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::TimedOut
    )
}

fn is_disconnect(error: &KvError) -> bool {
    matches!(error, KvError::Io(e) if is_disconnect_kind(e.kind()))
}
