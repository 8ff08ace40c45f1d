//! memcpool CLI Client
//!
//! Command-line interface for issuing single cache commands.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use memcpool::{ServerPool, StoreStatus};

/// memcpool CLI
#[derive(Parser, Debug)]
#[command(name = "memcpool-cli")]
#[command(about = "CLI for memcached-compatible cache servers")]
#[command(version)]
struct Args {
    /// Server address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:11211")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,

        /// Opaque flags stored with the value
        #[arg(short, long, default_value = "0")]
        flags: u32,

        /// Relative expiration in seconds
        #[arg(short, long, default_value = "3306")]
        exptime: u32,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },

    /// Ping the server
    Ping,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,memcpool=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let (host, port) = match parse_server(&args.server) {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Invalid server address {:?}: {}", args.server, e);
            std::process::exit(1);
        }
    };

    let mut pool = ServerPool::new();
    pool.add([("default", (host, port))]);

    let conn = match pool.resolve("default") {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to resolve server: {}", e);
            std::process::exit(1);
        }
    };
    let mut conn = conn.lock();

    let outcome = match args.command {
        Commands::Get { key } => conn.get(&key).map(|value| match value {
            Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            None => "(not found)".to_string(),
        }),

        Commands::Set {
            key,
            value,
            flags,
            exptime,
        } => conn
            .set_with(&key, value.as_bytes(), flags, exptime)
            .map(|status| match status {
                StoreStatus::Stored => "STORED".to_string(),
                StoreStatus::Other(raw) => raw,
            }),

        Commands::Del { key } => conn.delete(&key).map(|deleted| {
            if deleted {
                "DELETED".to_string()
            } else {
                "(not deleted)".to_string()
            }
        }),

        Commands::Ping => {
            let alive = conn.ping();
            println!("{}", if alive { "alive" } else { "unreachable" });
            std::process::exit(if alive { 0 } else { 1 });
        }
    };

    match outcome {
        Ok(text) => println!("{}", text),
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Split a `host:port` argument
fn parse_server(server: &str) -> Result<(String, u16), String> {
    let (host, port) = server
        .rsplit_once(':')
        .ok_or_else(|| "expected host:port".to_string())?;

    let port = port
        .parse::<u16>()
        .map_err(|e| format!("bad port: {}", e))?;

    Ok((host.to_string(), port))
}
