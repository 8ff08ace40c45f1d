//! # memcpool
//!
//! A minimal client for memcached-compatible cache servers with:
//! - Line-oriented ASCII text protocol over plain TCP
//! - Lazy connection establishment, one reused socket per server
//! - Numeric-passthrough / base64 value codec
//! - A named-server pool handing out one shared connection per alias
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Application                             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ alias
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     ServerPool                               │
//! │        (alias -> lazily created Connection)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Connection  │          │ Connection  │
//!   │ (1 socket)  │          │ (1 socket)  │
//!   └──────┬──────┘          └──────┬──────┘
//!          │ text protocol          │
//!          ▼                        ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │cache server │          │cache server │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! All I/O is synchronous and blocking; a hung server blocks the caller.
//! Share a `Connection` across threads only through the pool's mutex.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod network;
pub mod pool;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::ClientConfig;
pub use error::{MemcError, Result};
pub use network::Connection;
pub use pool::{ServerAddr, ServerPool};
pub use protocol::StoreStatus;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of memcpool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
