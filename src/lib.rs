//! # linekv
//!
//! An in-memory key-value store served over a line-oriented text protocol:
//! - `SET`, `GET`, `DELETE` and `EXISTS` commands, one per line
//! - One `OK ...` or `ERROR <CODE>` response line per command
//! - Strictly sequential service: one client at a time
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Listener                            │
//! │              (accepts one client at a time)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Connection Handler                           │
//! │          (line framing, ordered responses)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Parser    │ ───────▶ │ Dispatcher  │
//!   │  (Command)  │          │ (Response)  │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │    Store    │
//!                           │  (HashMap)  │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod protocol;
pub mod dispatcher;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::Config;
pub use store::Store;
pub use client::Client;
pub use network::Server;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of linekv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
