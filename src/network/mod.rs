//! Network Module
//!
//! TCP listener and client connection handling.
//!
//! ## Architecture
//! - Single thread, strictly sequential
//! - Each accepted connection is served to completion before the next
//!   `accept`; later clients wait in the listen backlog
//! - The server owns the `Store` and lends it to one connection at a time

mod server;
mod connection;

pub use server::Server;
pub use connection::Connection;
