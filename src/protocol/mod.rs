//! Protocol Module
//!
//! Defines the client side of the memcached ASCII text protocol.
//!
//! ## Wire Format (CRLF-terminated lines)
//!
//! ### Requests
//! ```text
//! get <key>\r\n
//! set <key> <flags> <exptime> <bytes>\r\n<data>\r\n
//! delete <key>\r\n
//! PING\r\n                (non-standard liveness probe)
//! ```
//!
//! ### Replies
//! Every reply begins with exactly one status line:
//! - `STORED`    - set succeeded
//! - `END`       - key absent or expired
//! - `ERROR`     - server rejected the command
//! - `DELETED`   - delete succeeded
//! - `VALUE <key> <flags> <bytes>` - value hit; followed by one data line
//!   and a terminating `END` line
//!
//! Any other status line is passed through to the caller verbatim.
//!
//! ## Value Encoding
//!
//! The transport is line-delimited, so arbitrary bytes (which may contain
//! CR/LF) travel base64-encoded. Purely numeric values travel unencoded so
//! the server's native numeric-increment semantics remain usable.

mod codec;
mod command;
mod reply;

pub use codec::{is_numeric, pack, unpack};
pub use command::Command;
pub use reply::{classify, Reply, StoreStatus, ValueHeader};
