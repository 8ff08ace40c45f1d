//! Error types for memcpool
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using MemcError
pub type Result<T> = std::result::Result<T, MemcError>;

/// Unified error type for memcpool operations
#[derive(Debug, Error)]
pub enum MemcError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not connected")]
    NotConnected,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Server replied with error: {0}")]
    Protocol(String),

    #[error("Value decode failed: {0}")]
    Codec(String),

    // -------------------------------------------------------------------------
    // Pool Errors
    // -------------------------------------------------------------------------
    #[error("Unknown server alias: {0}")]
    UnknownAlias(String),
}
