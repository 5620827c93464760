//! # Connection Fetcher
//!
//! Implements the "list Thera connections" use case.
//!
//! One upstream request per cycle, then for every in-scope entry:
//! 1. **Decode** into [`RawConnection`].
//! 2. **Parse** `created`/`updated`, before any lookup is spent on the entry.
//! 3. **Resolve** both systems through the [`SystemRepository`].
//! 4. **Normalize** via [`normalizer::normalize`].
//!
//! A failing entry is logged and skipped. Nothing here returns an error to
//! the caller; an unreachable upstream yields an empty list.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use thera_common::config::THERA_SYSTEM_ID;
use thera_common::connection::ConnectionRecord;
use thera_common::error::Rejected;
use thera_common::raw::RawConnection;
use thera_common::source::{ConnectionSource, Operation};
use thera_common::system::{StaticSystemInfo, SystemRepository};

use crate::normalizer;

pub struct ConnectionFetcher {
    source: Box<dyn ConnectionSource>,
    systems: Box<dyn SystemRepository>,
    hub_system_id: u64,
}

impl ConnectionFetcher {
    pub fn new(source: Box<dyn ConnectionSource>, systems: Box<dyn SystemRepository>) -> Self {
        Self {
            source,
            systems,
            hub_system_id: THERA_SYSTEM_ID,
        }
    }

    pub fn with_hub_system(mut self, hub_system_id: u64) -> Self {
        self.hub_system_id = hub_system_id;
        self
    }

    /// Fetches and normalizes the current connection list, in upstream order.
    #[instrument(level = "debug", skip(self), fields(hub = self.hub_system_id))]
    pub async fn fetch(&self) -> Vec<ConnectionRecord> {
        let operation = Operation::TheraConnections;
        let response = match self.source.send(operation).await {
            Ok(response) => response,
            Err(e) => {
                warn!("{} failed: {:#}", operation.name(), e);
                return Vec::new();
            }
        };

        let entries = connection_entries(response);
        let mut records = Vec::new();

        for entry in entries.iter().filter(|e| is_in_scope(e, self.hub_system_id)) {
            match self.process(entry).await {
                Ok(record) => records.push(record),
                Err(rejected) => debug!(id = %entry_id(entry), "skipping connection: {rejected}"),
            }
        }

        info!(
            received = entries.len(),
            kept = records.len(),
            "normalized thera connections"
        );
        records
    }

    async fn process(&self, entry: &Value) -> Result<ConnectionRecord, Rejected> {
        let raw = RawConnection::deserialize(entry)?;
        let times = normalizer::parse_times(&raw)?;
        let source = self.resolve(raw.source.id).await?;
        let target = self.resolve(raw.target.id).await?;
        Ok(normalizer::normalize(&raw, times, &source, &target))
    }

    async fn resolve(&self, system_id: u64) -> Result<StaticSystemInfo, Rejected> {
        match self.systems.get_system_data(system_id).await {
            Ok(Some(info)) => Ok(info),
            Ok(None) => Err(Rejected::UnknownSystem(system_id)),
            Err(e) => Err(Rejected::Lookup {
                id: system_id,
                reason: format!("{e:#}"),
            }),
        }
    }
}

/// Pulls the `connections` list out of an upstream response.
///
/// Empty, non-object and error-carrying responses all yield no entries.
pub fn connection_entries(response: Value) -> Vec<Value> {
    let Value::Object(mut body) = response else {
        return Vec::new();
    };

    if let Some(error) = body.get("error").filter(|e| !e.is_null()) {
        warn!("upstream answered with an error: {error}");
        return Vec::new();
    }

    match body.remove("connections") {
        Some(Value::Array(entries)) => entries,
        _ => Vec::new(),
    }
}

/// A wormhole whose source is the hub and whose target is present.
pub fn is_in_scope(entry: &Value, hub_system_id: u64) -> bool {
    let present = |key: &str| entry.get(key).is_some_and(|v| !v.is_null());

    entry.get("type").and_then(Value::as_str) == Some("wormhole")
        && present("source")
        && present("target")
        && entry
            .get("source")
            .and_then(|source| source.get("id"))
            .and_then(Value::as_u64)
            == Some(hub_system_id)
}

fn entry_id(entry: &Value) -> String {
    entry.get("id").map(Value::to_string).unwrap_or_default()
}
