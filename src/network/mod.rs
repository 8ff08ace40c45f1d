//! Network Module
//!
//! Blocking TCP client handling.
//!
//! ## Model
//! - One socket per [`Connection`], opened lazily, reused across commands
//! - Strictly synchronous: every write and read blocks the calling thread
//! - No internal locking; shared use goes through the pool's mutex

mod connection;

pub use connection::Connection;
