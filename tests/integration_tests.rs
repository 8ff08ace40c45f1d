//! Integration Tests
//!
//! End-to-end scenarios through the pool against the mock server.

mod common;

use common::MockServer;
use memcpool::{ClientConfig, ServerPool};

#[test]
fn test_full_cache_lifecycle_through_pool() {
    let server = MockServer::start();

    let mut pool = ServerPool::new();
    pool.add([("cache1", (server.host().to_string(), server.port()))]);

    // set
    let conn = pool.resolve("cache1").unwrap();
    let stored = conn.lock().set("greeting", b"hello world").unwrap();
    assert!(stored.is_stored());

    // get
    let conn = pool.resolve("cache1").unwrap();
    let value = conn.lock().get("greeting").unwrap();
    assert_eq!(value, Some(b"hello world".to_vec()));

    // delete
    let conn = pool.resolve("cache1").unwrap();
    assert!(conn.lock().delete("greeting").unwrap());

    // gone
    let conn = pool.resolve("cache1").unwrap();
    assert_eq!(conn.lock().get("greeting").unwrap(), None);

    // Every resolve handed back the same connection, which kept one socket
    assert_eq!(server.connections_accepted(), 1);
}

#[test]
fn test_numeric_counter_scenario() {
    let server = MockServer::start();

    let mut pool = ServerPool::new();
    pool.add([("cache1", (server.host().to_string(), server.port()))]);

    let conn = pool.resolve("cache1").unwrap();
    let mut conn = conn.lock();

    assert!(conn.set("counter", b"42").unwrap().is_stored());

    // Numeric values are never base64-wrapped
    assert_eq!(server.raw_value("counter").as_deref(), Some("42"));
    assert_eq!(conn.get("counter").unwrap(), Some(b"42".to_vec()));
}

#[test]
fn test_two_servers_two_connections() {
    let server_a = MockServer::start();
    let server_b = MockServer::start();

    let mut pool = ServerPool::new();
    pool.add([
        ("a", (server_a.host().to_string(), server_a.port())),
        ("b", (server_b.host().to_string(), server_b.port())),
    ]);

    pool.resolve("a").unwrap().lock().set("k", b"from-a").unwrap();
    pool.resolve("b").unwrap().lock().set("k", b"from-b").unwrap();

    // Same key, disjoint servers
    assert_eq!(
        pool.resolve("a").unwrap().lock().get("k").unwrap(),
        Some(b"from-a".to_vec())
    );
    assert_eq!(
        pool.resolve("b").unwrap().lock().get("k").unwrap(),
        Some(b"from-b".to_vec())
    );

    assert_eq!(server_a.connections_accepted(), 1);
    assert_eq!(server_b.connections_accepted(), 1);
}

#[test]
fn test_pool_store_defaults_apply() {
    let server = MockServer::start();

    let config = ClientConfig::builder().default_flags(7).build();
    let mut pool = ServerPool::with_config(config);
    pool.add([("cache1", (server.host().to_string(), server.port()))]);

    let conn = pool.resolve("cache1").unwrap();
    let mut conn = conn.lock();

    assert!(conn.set("flagged", b"payload").unwrap().is_stored());
    assert_eq!(conn.get("flagged").unwrap(), Some(b"payload".to_vec()));
}

#[test]
fn test_ping_through_pool() {
    let server = MockServer::start();

    let mut pool = ServerPool::new();
    pool.add([("cache1", (server.host().to_string(), server.port()))]);

    let conn = pool.resolve("cache1").unwrap();
    assert!(conn.lock().ping());
}
