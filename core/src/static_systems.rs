//! In-memory system lookup, filled from a JSON file or built directly.
//!
//! The file holds a JSON array of systems in the same shape as
//! [`StaticSystemInfo`]:
//!
//! ```json
//! [{ "id": 31000005, "name": "Thera", "trueSec": -0.99,
//!    "constellation": { "id": 21000324, "region": { "id": 11000031, "name": "G-R00031" } } }]
//! ```

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use thera_common::system::{StaticSystemInfo, SystemRepository};

use crate::error::AdapterError;

#[derive(Debug, Default, Clone)]
pub struct StaticSystemRepo {
    systems: HashMap<u64, StaticSystemInfo>,
}

impl StaticSystemRepo {
    pub fn from_file(path: &Path) -> Result<Self, AdapterError> {
        let text = std::fs::read_to_string(path).map_err(|source| AdapterError::SystemsFile {
            path: path.to_path_buf(),
            source,
        })?;
        let systems: Vec<StaticSystemInfo> =
            serde_json::from_str(&text).map_err(|source| AdapterError::SystemsFormat {
                path: path.to_path_buf(),
                source,
            })?;

        info!("loaded {} systems from {}", systems.len(), path.display());
        Ok(Self::from_systems(systems))
    }

    pub fn from_systems(systems: impl IntoIterator<Item = StaticSystemInfo>) -> Self {
        Self {
            systems: systems.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

#[async_trait]
impl SystemRepository for StaticSystemRepo {
    async fn get_system_data(&self, system_id: u64) -> anyhow::Result<Option<StaticSystemInfo>> {
        Ok(self.systems.get(&system_id).cloned())
    }
}
