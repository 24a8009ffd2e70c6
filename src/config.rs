//! Configuration for linekv
//!
//! Centralized configuration with sensible defaults.

use std::net::ToSocketAddrs;

use crate::error::{KvError, Result};

/// Port the server listens on when none is given
pub const DEFAULT_PORT: u16 = 8080;

/// Main configuration for a linekv server
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address
    pub listen_addr: String,

    /// Disable Nagle's algorithm on accepted connections
    pub nodelay: bool,

    /// Connection read timeout (milliseconds, 0 = block forever)
    pub read_timeout_ms: u64,

    /// Connection write timeout (milliseconds, 0 = block forever)
    pub write_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Connection Buffering
    // -------------------------------------------------------------------------
    /// Bytes requested from the socket per read.
    ///
    /// This bounds a single read only. Lines longer than this are assembled
    /// across reads.
    pub read_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: format!("0.0.0.0:{}", DEFAULT_PORT),
            nodelay: true,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
            read_buffer_size: 4096,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default config listening on all interfaces at `port`
    pub fn with_port(port: u16) -> Self {
        Self::builder().listen_addr(format!("0.0.0.0:{}", port)).build()
    }

    /// Check the config for values the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.read_buffer_size == 0 {
            return Err(KvError::Config(
                "read_buffer_size must be greater than zero".to_string(),
            ));
        }

        self.listen_addr.to_socket_addrs().map_err(|e| {
            KvError::Config(format!("invalid listen address '{}': {}", self.listen_addr, e))
        })?;

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Enable or disable TCP_NODELAY on accepted connections
    pub fn nodelay(mut self, nodelay: bool) -> Self {
        self.config.nodelay = nodelay;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the per-read chunk size (in bytes)
    pub fn read_buffer_size(mut self, size: usize) -> Self {
        self.config.read_buffer_size = size;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
