//! Error types for linekv
//!
//! Provides a unified error type for all fallible operations.
//!
//! Protocol-level failures (`MISSING_ARGUMENTS`, `KEY_NOT_FOUND`,
//! `INVALID_COMMAND`) are not errors on the server side: they are ordinary
//! [`Response`](crate::protocol::Response) values sent back to the client.

use std::io;

use thiserror::Error;

use crate::protocol::ErrorCode;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Unified error type for linekv operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Client Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Server replied with error: {0}")]
    Server(ErrorCode),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
