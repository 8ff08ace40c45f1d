//! Configuration for memcpool clients
//!
//! Centralized configuration with sensible defaults.

/// Default flags sent with every `set` unless overridden
pub const DEFAULT_FLAGS: u32 = 0;

/// Default relative expiration in seconds sent with every `set`.
///
/// Deliberately generous compared to what most deployments use; callers that
/// need tighter lifetimes pass an explicit exptime via
/// [`set_with`](crate::network::Connection::set_with).
pub const DEFAULT_EXPTIME: u32 = 3306;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 11211;

/// Per-client configuration
///
/// Applied to every connection a [`ServerPool`](crate::pool::ServerPool)
/// creates, or passed directly to
/// [`Connection::with_config`](crate::network::Connection::with_config).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    // -------------------------------------------------------------------------
    // Store Defaults
    // -------------------------------------------------------------------------
    /// Flags value sent with `set` when the caller does not supply one
    pub default_flags: u32,

    /// Relative expiration (seconds) sent with `set` when the caller does
    /// not supply one
    pub default_exptime: u32,

    // -------------------------------------------------------------------------
    // Socket Configuration
    // -------------------------------------------------------------------------
    /// Disable Nagle's algorithm on newly opened sockets
    pub nodelay: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_flags: DEFAULT_FLAGS,
            default_exptime: DEFAULT_EXPTIME,
            nodelay: true,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the default flags for `set`
    pub fn default_flags(mut self, flags: u32) -> Self {
        self.config.default_flags = flags;
        self
    }

    /// Set the default expiration (in seconds) for `set`
    pub fn default_exptime(mut self, exptime: u32) -> Self {
        self.config.default_exptime = exptime;
        self
    }

    /// Enable or disable TCP_NODELAY on new sockets
    pub fn nodelay(mut self, nodelay: bool) -> Self {
        self.config.nodelay = nodelay;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
