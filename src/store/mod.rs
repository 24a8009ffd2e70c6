//! Store Module
//!
//! In-memory mapping from keys to values.
//!
//! ## Responsibilities
//! - Insert-or-update, lookup, removal and membership checks
//! - Entry count and bulk clear for administration and tests
//!
//! ## Data Structure Choice
//! A plain `HashMap` owned by the server:
//! - No ordering or range queries are needed
//! - Connections are served one at a time, so no lock is required
//! - Keys and values are opaque bytes; validation happens in the parser

mod table;

pub use table::Store;
