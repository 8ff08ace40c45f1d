//! Server Pool
//!
//! Maps logical server aliases to lazily created, shared connections.
//!
//! ## Lifecycle
//! - `add` registers `(alias, (host, port))` entries; last write wins
//! - `resolve` creates the connection for an alias on first request and
//!   hands back the same shared handle on every request after that
//! - Entries are never evicted and never health-checked; a connection whose
//!   socket has failed is still the one `resolve` returns
//!
//! The pool is an explicitly constructed value with its own lifetime; there
//! is no process-global instance.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::ClientConfig;
use crate::error::{MemcError, Result};
use crate::network::Connection;

/// Address of a registered cache server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddr {
    pub host: String,
    pub port: u16,
}

impl ServerAddr {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl<H: Into<String>> From<(H, u16)> for ServerAddr {
    fn from((host, port): (H, u16)) -> Self {
        Self::new(host, port)
    }
}

/// Registry of named cache servers with one lazily created connection each
pub struct ServerPool {
    /// Configuration applied to every connection this pool creates
    config: ClientConfig,

    /// Alias -> address, populated only by `add`
    servers: HashMap<String, ServerAddr>,

    /// Alias -> shared connection, created on first `resolve`
    ///
    /// The map lock is held across creation so two threads racing to
    /// resolve a fresh alias cannot both build a connection.
    connections: Mutex<HashMap<String, Arc<Mutex<Connection>>>>,
}

impl ServerPool {
    /// Create an empty pool with default client configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create an empty pool with an explicit client configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            servers: HashMap::new(),
            connections: Mutex::new(HashMap::new()),
        }
    }

    /// Merge server entries into the registry
    ///
    /// The last entry registered for a given alias wins. Host and port are
    /// taken as given; nothing is validated or resolved here.
    pub fn add<A, S>(&mut self, entries: impl IntoIterator<Item = (A, S)>)
    where
        A: Into<String>,
        S: Into<ServerAddr>,
    {
        for (alias, addr) in entries {
            let alias = alias.into();
            let addr = addr.into();
            tracing::debug!("Registered server {:?} -> {}:{}", alias, addr.host, addr.port);
            self.servers.insert(alias, addr);
        }
    }

    /// Number of registered servers
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Look up the connection for an alias, creating it on first request
    ///
    /// Returns the same `Arc` for a given alias on every call, even if the
    /// underlying socket has since failed. An alias never passed to `add`
    /// yields [`MemcError::UnknownAlias`].
    ///
    /// Creating the connection performs no I/O; the socket opens on the
    /// first command issued through it.
    pub fn resolve(&self, alias: &str) -> Result<Arc<Mutex<Connection>>> {
        let mut connections = self.connections.lock();

        if let Some(conn) = connections.get(alias) {
            return Ok(Arc::clone(conn));
        }

        let addr = self
            .servers
            .get(alias)
            .ok_or_else(|| MemcError::UnknownAlias(alias.to_string()))?;

        let conn = Arc::new(Mutex::new(Connection::with_config(
            addr.host.clone(),
            addr.port,
            self.config.clone(),
        )));
        connections.insert(alias.to_string(), Arc::clone(&conn));

        tracing::debug!("Created connection for alias {:?}", alias);

        Ok(conn)
    }
}

impl Default for ServerPool {
    fn default() -> Self {
        Self::new()
    }
}
