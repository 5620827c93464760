use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Static universe data for one solar system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticSystemInfo {
    pub id: u64,
    pub name: String,
    #[serde(rename = "trueSec")]
    pub true_sec: f64,
    pub constellation: Constellation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constellation {
    pub id: u64,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: u64,
    pub name: String,
}

/// Defines the contract for resolving solar systems by id.
#[async_trait]
pub trait SystemRepository: Send + Sync {
    /// Retrieves static data for `system_id`.
    ///
    /// # Returns
    /// * `Ok(Some(_))` - The system is known.
    /// * `Ok(None)` - No such system.
    /// * `Err(_)` - The backing store could not be queried.
    async fn get_system_data(&self, system_id: u64) -> anyhow::Result<Option<StaticSystemInfo>>;
}
