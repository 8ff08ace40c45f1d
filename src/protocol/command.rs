//! Command definitions
//!
//! Represents commands sent to the cache server, and their text framing.

use bytes::{BufMut, Bytes, BytesMut};

/// A command to send to the server
///
/// For `Set`, `data` is the already-encoded payload (see
/// [`pack`](super::pack)); the advertised byte count is derived from it at
/// encode time so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch a value by key
    Get { key: String },

    /// Store a value under a key
    Set {
        key: String,
        flags: u32,
        exptime: u32,
        data: String,
    },

    /// Remove a key
    Delete { key: String },

    /// Liveness probe (not a real protocol verb; see `Connection::ping`)
    Ping,
}

impl Command {
    /// Render the complete CRLF-terminated wire frame for this command
    ///
    /// `Set` produces the command line and the data line in one buffer so a
    /// single write carries both.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.frame_len());

        match self {
            Command::Get { key } => {
                buf.put_slice(b"get ");
                buf.put_slice(key.as_bytes());
            }
            Command::Set {
                key,
                flags,
                exptime,
                data,
            } => {
                buf.put_slice(
                    format!("set {} {} {} {}", key, flags, exptime, data.len()).as_bytes(),
                );
                buf.put_slice(b"\r\n");
                buf.put_slice(data.as_bytes());
            }
            Command::Delete { key } => {
                buf.put_slice(b"delete ");
                buf.put_slice(key.as_bytes());
            }
            Command::Ping => {
                buf.put_slice(b"PING");
            }
        }

        buf.put_slice(b"\r\n");
        buf.freeze()
    }

    /// Upper bound on the encoded frame size, used to size the buffer
    fn frame_len(&self) -> usize {
        match self {
            Command::Get { key } => 4 + key.len() + 2,
            // "set " + key + flags/exptime/len digits + separators + data
            Command::Set { key, data, .. } => 4 + key.len() + 34 + data.len() + 4,
            Command::Delete { key } => 7 + key.len() + 2,
            Command::Ping => 6,
        }
    }

    /// The verb this command puts on the wire, for logging
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Get { .. } => "get",
            Command::Set { .. } => "set",
            Command::Delete { .. } => "delete",
            Command::Ping => "PING",
        }
    }
}
