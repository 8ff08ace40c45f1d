//! Cache Connection
//!
//! Owns one socket to one cache server and speaks the text protocol over it.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;

use crate::config::{ClientConfig, DEFAULT_HOST, DEFAULT_PORT};
use crate::error::{MemcError, Result};
use crate::protocol::{classify, pack, unpack, Command, Reply, StoreStatus, ValueHeader};

/// The two halves of an open socket
///
/// The read half is buffered for line framing; the write half stays
/// unbuffered so a flushed command is on the wire before we wait for the
/// reply.
struct Wire {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

/// A client connection to a single cache server
///
/// The socket is opened on the first command and reused for every command
/// after that; there is no per-command reconnect and no health check. A
/// failed command leaves the socket in place — callers wanting a fresh one
/// call [`close`](Connection::close). Dropping the connection releases the
/// socket.
pub struct Connection {
    /// Server host, immutable after construction
    host: String,

    /// Server port, immutable after construction
    port: u16,

    /// Store defaults and socket options
    config: ClientConfig,

    /// The open socket; `None` until the first command
    wire: Option<Wire>,
}

impl Connection {
    /// Create a connection to `host:port` with default configuration
    ///
    /// No I/O happens here; the socket is opened by the first command.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self::with_config(host, port, ClientConfig::default())
    }

    /// Create a connection with an explicit configuration
    pub fn with_config(host: impl Into<String>, port: u16, config: ClientConfig) -> Self {
        Self {
            host: host.into(),
            port,
            config,
            wire: None,
        }
    }

    /// The server address this connection targets
    pub fn address(&self) -> (&str, u16) {
        (&self.host, self.port)
    }

    /// Whether a socket is currently open
    pub fn is_connected(&self) -> bool {
        self.wire.is_some()
    }

    /// Drop the socket, if any
    ///
    /// The next command transparently reconnects.
    pub fn close(&mut self) {
        if self.wire.take().is_some() {
            tracing::debug!("Closed connection to {}:{}", self.host, self.port);
        }
    }

    // =========================================================================
    // Public Operations
    // =========================================================================

    /// Probe the server for liveness
    ///
    /// Sends a `PING` command the protocol does not define, so a live server
    /// answers `ERROR` — receipt of that error classification is what
    /// "alive" means here. Anything else, including a transport failure,
    /// reads as unreachable. Inherited quirk, kept for compatibility with
    /// the client this replaces.
    pub fn ping(&mut self) -> bool {
        match self.send_command(&Command::Ping) {
            Ok(line) => classify(&line) == Reply::Error,
            Err(e) => {
                tracing::debug!("Ping to {}:{} failed: {}", self.host, self.port, e);
                false
            }
        }
    }

    /// Fetch a value
    ///
    /// Returns `Ok(None)` when the key is absent or expired; that outcome is
    /// deliberately distinct from transport and protocol errors.
    ///
    /// Only the single-value reply subset is supported: one `VALUE` header,
    /// one data line, one terminating `END`. The terminator is always read
    /// and discarded so the stream stays aligned for the next command.
    pub fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        let status = self.send_command(&Command::Get {
            key: key.to_string(),
        })?;

        match classify(&status) {
            Reply::Error => Err(MemcError::Protocol(status)),
            Reply::Miss => Ok(None),
            Reply::Stored | Reply::Other(_) => {
                if let Some(header) = ValueHeader::parse(&status) {
                    tracing::trace!(
                        "Value hit for {:?}: flags={} bytes={}",
                        header.key,
                        header.flags,
                        header.bytes
                    );
                }

                let data = self.read_response()?;
                let value = unpack(&data)?;

                // Consume the terminator that follows the data line
                let terminator = self.read_response()?;
                if terminator != "END" {
                    tracing::debug!(
                        "Expected END terminator after value, got {:?}",
                        terminator
                    );
                }

                Ok(Some(value))
            }
        }
    }

    /// Store a value with the configured default flags and expiration
    pub fn set(&mut self, key: &str, value: &[u8]) -> Result<StoreStatus> {
        self.set_with(
            key,
            value,
            self.config.default_flags,
            self.config.default_exptime,
        )
    }

    /// Store a value with explicit flags and relative expiration (seconds)
    ///
    /// The payload is encoded (numeric passthrough or base64), its encoded
    /// byte length advertised on the command line, and command plus data
    /// sent as one write. Status lines other than `STORED` and `ERROR` pass
    /// through in [`StoreStatus::Other`].
    pub fn set_with(
        &mut self,
        key: &str,
        value: &[u8],
        flags: u32,
        exptime: u32,
    ) -> Result<StoreStatus> {
        let data = pack(value);
        let status = self.send_command(&Command::Set {
            key: key.to_string(),
            flags,
            exptime,
            data,
        })?;

        match classify(&status) {
            Reply::Stored => Ok(StoreStatus::Stored),
            Reply::Error => Err(MemcError::Protocol(status)),
            Reply::Miss => Ok(StoreStatus::Other(status)),
            Reply::Other(other) => Ok(StoreStatus::Other(other)),
        }
    }

    /// Remove a key
    ///
    /// `Ok(true)` only on the literal `DELETED` reply; any other reply —
    /// including "not found" — is `Ok(false)`. The two are not
    /// distinguishable through this operation.
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        let status = self.send_command(&Command::Delete {
            key: key.to_string(),
        })?;

        Ok(status == "DELETED")
    }

    // =========================================================================
    // Socket Handling
    // =========================================================================

    /// Ensure a socket is open, opening one if needed
    ///
    /// Idempotent: a second call while a socket is open is a no-op. On
    /// failure the wire stays unset and the error propagates; there is no
    /// retry.
    fn connect(&mut self) -> Result<&mut Wire> {
        if self.wire.is_none() {
            let stream = TcpStream::connect((self.host.as_str(), self.port))?;

            if self.config.nodelay {
                // Disable Nagle's algorithm for low latency
                stream.set_nodelay(true)?;
            }

            // Clone stream for separate read/write handles
            let read_stream = stream.try_clone()?;

            tracing::debug!("Connected to {}:{}", self.host, self.port);

            self.wire = Some(Wire {
                reader: BufReader::new(read_stream),
                writer: stream,
            });
        }

        self.wire.as_mut().ok_or(MemcError::NotConnected)
    }

    /// Write one command frame and read the status line that answers it
    ///
    /// `write_all` loops internally until the whole frame is on the wire, so
    /// short writes never truncate a command.
    fn send_command(&mut self, command: &Command) -> Result<String> {
        let frame = command.encode();

        let wire = self.connect()?;
        wire.writer.write_all(&frame)?;
        wire.writer.flush()?;

        tracing::trace!(
            "Sent {} ({} bytes) to {}:{}",
            command.verb(),
            frame.len(),
            self.host,
            self.port
        );

        self.read_response()
    }

    /// Read one reply line from the socket
    ///
    /// The unit of reply framing: every server reply starts with exactly one
    /// line, and value-bearing replies are followed by one data line read
    /// with a second call. Leading/trailing CR, LF, and spaces are stripped.
    fn read_response(&mut self) -> Result<String> {
        let wire = self.wire.as_mut().ok_or(MemcError::NotConnected)?;

        let mut line = String::new();
        let n = wire.reader.read_line(&mut line)?;
        if n == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "server closed the connection",
            )
            .into());
        }

        Ok(line
            .trim_matches(|c| c == '\r' || c == '\n' || c == ' ')
            .to_string())
    }
}

impl Default for Connection {
    /// Connection to a server on the conventional local address
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}
