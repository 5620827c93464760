use std::sync::atomic::Ordering;
use std::time::Duration;

use serde_json::json;
use thera_common::config::CacheConfig;
use thera_core::endpoint::ConnectionsEndpoint;
use thera_core::fetcher::ConnectionFetcher;

use crate::support::{self, FakeSource};

fn endpoint(source: FakeSource, ttl: Duration) -> ConnectionsEndpoint {
    let fetcher = ConnectionFetcher::new(Box::new(source), Box::new(support::systems()));
    ConnectionsEndpoint::new(
        fetcher,
        CacheConfig {
            key: "CACHED_THERA_CONNECTIONS".to_string(),
            ttl,
        },
    )
}

#[tokio::test]
async fn second_request_is_served_from_cache() {
    let (source, calls) = FakeSource::answering(support::mixed_batch());
    let endpoint = endpoint(source, Duration::from_secs(180));

    let first = endpoint.get().await;
    let second = endpoint.get().await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert_eq!(first.connections, second.connections);
    assert_eq!(first.expires_in, Duration::from_secs(180));
    assert!(second.expires_in <= first.expires_in);
}

#[tokio::test]
async fn zero_ttl_always_fetches() {
    let (source, calls) = FakeSource::answering(support::mixed_batch());
    let endpoint = endpoint(source, Duration::ZERO);

    endpoint.get().await;
    let second = endpoint.get().await;

    assert!(!second.from_cache);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn response_body_wraps_connections() {
    let (source, _) = FakeSource::answering(json!({ "connections": [support::connection(42, support::JITA)] }));
    let response = endpoint(source, Duration::from_secs(180)).get().await;

    let body = serde_json::to_value(&response).unwrap();
    assert_eq!(body.as_object().unwrap().len(), 1);
    assert_eq!(body["connections"][0]["id"], json!(42));
    assert_eq!(body["connections"][0]["scope"], json!("wh"));
}

#[tokio::test]
async fn empty_upstream_is_cached_too() {
    let (source, calls) = FakeSource::answering(json!({ "connections": [] }));
    let endpoint = endpoint(source, Duration::from_secs(180));

    assert!(endpoint.get().await.connections.is_empty());
    assert!(endpoint.get().await.connections.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
