//! Shared test helper: an in-process cache server speaking the protocol
//! subset the client uses.
//!
//! Behavior:
//! - `get <key>`    -> `VALUE <key> <flags> <len>` + data + `END`, or `END`
//! - `set ...`      -> consumes the data line, stores it verbatim, `STORED`
//! - `delete <key>` -> `DELETED` or `NOT_FOUND`
//! - anything else  -> `ERROR` (which is also what a real server answers to
//!   the client's PING probe)
//!
//! Trigger keys for failure paths:
//! - `get __error__`   -> `ERROR`
//! - `set __reject__ ...` -> consumes the data line, replies `NOT_STORED`

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

type Store = Arc<Mutex<HashMap<String, (u32, String)>>>;

pub struct MockServer {
    host: String,
    port: u16,
    accepted: Arc<AtomicUsize>,
    store: Store,
}

impl MockServer {
    /// Bind an ephemeral port and start serving in background threads
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let addr = listener.local_addr().expect("local addr");

        let accepted = Arc::new(AtomicUsize::new(0));
        let store: Store = Arc::new(Mutex::new(HashMap::new()));

        let accepted_counter = Arc::clone(&accepted);
        let server_store = Arc::clone(&store);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { return };
                accepted_counter.fetch_add(1, Ordering::SeqCst);
                let store = Arc::clone(&server_store);
                thread::spawn(move || serve_client(stream, store));
            }
        });

        Self {
            host: addr.ip().to_string(),
            port: addr.port(),
            accepted,
            store,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// How many TCP connections the server has accepted so far
    pub fn connections_accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }

    /// The wire-level text stored for a key, if any
    ///
    /// Lets tests assert what actually traveled: numeric values land
    /// verbatim, everything else lands as base64.
    pub fn raw_value(&self, key: &str) -> Option<String> {
        self.store
            .lock()
            .expect("store lock")
            .get(key)
            .map(|(_, data)| data.clone())
    }
}

/// A bound-then-released port: connecting to it is refused
pub fn dead_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}

fn serve_client(stream: TcpStream, store: Store) {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
    let mut writer = stream;

    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let reply_ok = match parts.as_slice() {
            ["get", "__error__"] => write!(writer, "ERROR\r\n"),

            ["get", key] => {
                let store = store.lock().expect("store lock");
                match store.get(*key) {
                    Some((flags, data)) => write!(
                        writer,
                        "VALUE {} {} {}\r\n{}\r\nEND\r\n",
                        key,
                        flags,
                        data.len(),
                        data
                    ),
                    None => write!(writer, "END\r\n"),
                }
            }

            ["set", key, flags, _exptime, _bytes] => {
                let mut data = String::new();
                if reader.read_line(&mut data).is_err() {
                    return;
                }
                let data = data.trim_end_matches(['\r', '\n']).to_string();

                if *key == "__reject__" {
                    write!(writer, "NOT_STORED\r\n")
                } else {
                    let flags = flags.parse().unwrap_or(0);
                    store
                        .lock()
                        .expect("store lock")
                        .insert(key.to_string(), (flags, data));
                    write!(writer, "STORED\r\n")
                }
            }

            ["delete", key] => {
                let removed = store.lock().expect("store lock").remove(*key).is_some();
                if removed {
                    write!(writer, "DELETED\r\n")
                } else {
                    write!(writer, "NOT_FOUND\r\n")
                }
            }

            _ => write!(writer, "ERROR\r\n"),
        };

        if reply_ok.is_err() || writer.flush().is_err() {
            return;
        }
    }
}
