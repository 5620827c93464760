use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use thera_common::source::{ConnectionSource, Operation};
use thera_common::system::{Constellation, Region, StaticSystemInfo, SystemRepository};
use thera_core::static_systems::StaticSystemRepo;

pub const THERA: u64 = 31000005;
pub const JITA: u64 = 30000142;
pub const AMARR: u64 = 30002187;

/// Upstream stand-in that answers every call with the same response.
pub struct FakeSource {
    response: Result<Value, String>,
    calls: Arc<AtomicUsize>,
}

impl FakeSource {
    pub fn answering(response: Value) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = Self {
            response: Ok(response),
            calls: calls.clone(),
        };
        (source, calls)
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            response: Err(reason.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl ConnectionSource for FakeSource {
    async fn send(&self, operation: Operation) -> anyhow::Result<Value> {
        assert_eq!(operation, Operation::TheraConnections);
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone().map_err(anyhow::Error::msg)
    }
}

/// Static lookup that counts how often it is asked.
pub struct CountingSystems {
    inner: StaticSystemRepo,
    lookups: Arc<AtomicUsize>,
}

impl CountingSystems {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let lookups = Arc::new(AtomicUsize::new(0));
        let repo = Self {
            inner: systems(),
            lookups: lookups.clone(),
        };
        (repo, lookups)
    }
}

#[async_trait]
impl SystemRepository for CountingSystems {
    async fn get_system_data(&self, system_id: u64) -> anyhow::Result<Option<StaticSystemInfo>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.get_system_data(system_id).await
    }
}

/// Lookup whose backing store is down.
pub struct BrokenSystems;

#[async_trait]
impl SystemRepository for BrokenSystems {
    async fn get_system_data(&self, _system_id: u64) -> anyhow::Result<Option<StaticSystemInfo>> {
        anyhow::bail!("static data unavailable")
    }
}

fn system(id: u64, name: &str, true_sec: f64, constellation: u64, region: (u64, &str)) -> StaticSystemInfo {
    StaticSystemInfo {
        id,
        name: name.to_string(),
        true_sec,
        constellation: Constellation {
            id: constellation,
            region: Region {
                id: region.0,
                name: region.1.to_string(),
            },
        },
    }
}

pub fn systems() -> StaticSystemRepo {
    StaticSystemRepo::from_systems([
        system(THERA, "Thera", -0.99, 21000324, (11000031, "G-R00031")),
        system(JITA, "Jita", 0.9459131166648389, 20000020, (10000002, "The Forge")),
        system(AMARR, "Amarr", 1.0, 20000322, (10000043, "Domain")),
    ])
}

pub fn connection(id: u64, target: u64) -> Value {
    json!({
        "id": id,
        "type": "wormhole",
        "source": { "id": THERA, "signature": { "name": "ABC-123" } },
        "target": { "id": target, "signature": { "name": "" } },
        "wormhole": { "estimatedEol": 2, "jumpMass": "large" },
        "wh_exits_outward": true,
        "wh_type": "C5",
        "created": "2023-01-01T00:00:00Z",
        "updated": "2023-01-01T01:00:00Z",
        "character": { "id": 2112625428, "name": "Scout" }
    })
}

/// One valid entry surrounded by everything the pipeline must drop, then a
/// second valid entry.
pub fn mixed_batch() -> Value {
    let mut stargate = connection(100, JITA);
    stargate["type"] = json!("stargate");

    let mut turnur = connection(101, JITA);
    turnur["source"]["id"] = json!(30002086);

    let mut no_source = connection(103, JITA);
    no_source.as_object_mut().unwrap().remove("source");

    let mut null_source = connection(104, JITA);
    null_source["source"] = Value::Null;

    let mut no_target = connection(102, JITA);
    no_target.as_object_mut().unwrap().remove("target");

    let mut bad_created = connection(43, JITA);
    bad_created["created"] = json!("not a date");

    let mut no_wormhole = connection(44, JITA);
    no_wormhole.as_object_mut().unwrap().remove("wormhole");

    let unknown_target = connection(45, 31999999);

    let mut inward = connection(46, AMARR);
    inward["wh_exits_outward"] = json!(false);
    inward["wh_type"] = json!("k162");
    inward["target"]["signature"]["name"] = json!("XYZ-987");
    inward["wormhole"] = json!({ "estimatedEol": 16, "jumpMass": "capital" });

    json!({
        "connections": [
            connection(42, JITA),
            stargate,
            turnur,
            no_source,
            null_source,
            no_target,
            bad_created,
            no_wormhole,
            unknown_target,
            inward,
        ]
    })
}
