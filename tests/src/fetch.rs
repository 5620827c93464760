use std::sync::atomic::Ordering;

use serde_json::json;
use thera_common::connection::{ConnectionTag, Scope, SignatureType};
use thera_core::fetcher::ConnectionFetcher;

use crate::support::{self, AMARR, BrokenSystems, CountingSystems, FakeSource, JITA, THERA};

fn fetcher(source: FakeSource) -> ConnectionFetcher {
    ConnectionFetcher::new(Box::new(source), Box::new(support::systems()))
}

#[tokio::test]
async fn mixed_batch_keeps_only_valid_entries_in_order() {
    let (source, calls) = FakeSource::answering(support::mixed_batch());

    let records = fetcher(source).fetch().await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![42, 46]);
}

#[tokio::test]
async fn example_connection_is_normalized() {
    let (source, _) = FakeSource::answering(json!({ "connections": [support::connection(42, JITA)] }));

    let records = fetcher(source).fetch().await;
    let record = &records[0];

    assert_eq!(record.scope, Scope::Wh);
    assert_eq!(record.created.timestamp, 1672531200);
    assert_eq!(record.updated, 1672534800);
    assert_eq!(
        record.tags,
        vec![ConnectionTag::Fresh, ConnectionTag::Eol, ConnectionTag::JumpMassL]
    );
    assert_eq!(record.source.id, THERA);
    assert_eq!(record.source.system_class, -0.99);
    assert_eq!(record.target.name, "Jita");
    assert_eq!(record.target.system_class, 0.9459);
    assert_eq!(record.target.region.name, "The Forge");

    let value = serde_json::to_value(record).unwrap();
    assert_eq!(value["created"]["character"]["name"], json!("Scout"));
    assert_eq!(
        value["sourceSignature"],
        json!({ "name": "ABC-123", "short_name": "ABC", "type": { "name": "C5" } })
    );
    assert_eq!(value["targetSignature"], json!({ "name": null, "short_name": null }));
}

#[tokio::test]
async fn inward_connection_types_target_signature() {
    let (source, _) = FakeSource::answering(support::mixed_batch());

    let records = fetcher(source).fetch().await;
    let inward = records.iter().find(|r| r.target.id == AMARR).unwrap();

    assert_eq!(inward.tags, vec![ConnectionTag::Fresh, ConnectionTag::JumpMassXl]);
    assert_eq!(inward.source_signature.kind, None);
    assert_eq!(
        inward.target_signature.kind,
        Some(SignatureType { name: "K162".to_string() })
    );
    assert_eq!(inward.target_signature.short_name.as_deref(), Some("XYZ"));
}

#[tokio::test]
async fn upstream_failure_yields_empty_list() {
    let records = fetcher(FakeSource::failing("connection refused")).fetch().await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn upstream_error_marker_yields_empty_list() {
    let (source, _) = FakeSource::answering(json!({
        "error": "503 Service Unavailable",
        "connections": [support::connection(42, JITA)]
    }));

    assert!(fetcher(source).fetch().await.is_empty());
}

#[tokio::test]
async fn broken_system_lookup_drops_entries_without_failing() {
    let (source, _) = FakeSource::answering(support::mixed_batch());
    let fetcher = ConnectionFetcher::new(Box::new(source), Box::new(BrokenSystems));

    assert!(fetcher.fetch().await.is_empty());
}

#[tokio::test]
async fn custom_hub_changes_the_filter() {
    let mut entry = support::connection(7, THERA);
    entry["source"]["id"] = json!(JITA);
    let (source, _) = FakeSource::answering(json!({ "connections": [entry, support::connection(8, JITA)] }));

    let records = fetcher(source).with_hub_system(JITA).fetch().await;

    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![7]);
}

#[tokio::test]
async fn repeated_fetches_are_identical() {
    let (source, calls) = FakeSource::answering(support::mixed_batch());
    let fetcher = fetcher(source);

    let first = fetcher.fetch().await;
    let second = fetcher.fetch().await;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn bad_timestamp_is_rejected_before_any_lookup() {
    let mut entry = support::connection(49, JITA);
    entry["created"] = json!("garbage");
    let (source, _) = FakeSource::answering(json!({ "connections": [entry] }));
    let (systems, lookups) = CountingSystems::new();

    let records = ConnectionFetcher::new(Box::new(source), Box::new(systems)).fetch().await;

    assert!(records.is_empty());
    assert_eq!(lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn loosely_shaped_optional_fields_keep_the_connection() {
    let mut bad_created = support::connection(48, JITA);
    bad_created["created"] = json!("garbage");

    let mut empty_character = support::connection(50, JITA);
    empty_character["character"] = json!([]);

    let mut null_signature = support::connection(51, JITA);
    null_signature["target"]["signature"] = serde_json::Value::Null;

    let (source, _) = FakeSource::answering(json!({
        "connections": [bad_created, empty_character, null_signature]
    }));
    let (systems, lookups) = CountingSystems::new();

    let records = ConnectionFetcher::new(Box::new(source), Box::new(systems)).fetch().await;

    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![50, 51]);
    assert_eq!(lookups.load(Ordering::SeqCst), 4);
    assert!(records[0].created.character.is_empty());

    let value = serde_json::to_value(&records[1]).unwrap();
    assert_eq!(value["targetSignature"], json!({ "name": null, "short_name": null }));
}
