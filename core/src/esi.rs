//! Static system lookup backed by the public ESI universe endpoints.
//!
//! A system resolves through three requests (system, constellation,
//! region). Results never change, so each resolved system is memoized for
//! the lifetime of the repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use thera_common::system::{Constellation, Region, StaticSystemInfo, SystemRepository};

use crate::error::AdapterError;

#[derive(Debug, Deserialize)]
struct EsiSystem {
    system_id: u64,
    name: String,
    security_status: f64,
    constellation_id: u64,
}

#[derive(Debug, Deserialize)]
struct EsiConstellation {
    constellation_id: u64,
    region_id: u64,
}

#[derive(Debug, Deserialize)]
struct EsiRegion {
    region_id: u64,
    name: String,
}

pub struct EsiSystemRepo {
    client: Client,
    base_url: String,
    resolved: RwLock<HashMap<u64, StaticSystemInfo>>,
}

impl EsiSystemRepo {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("thera/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build esi http client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            resolved: RwLock::new(HashMap::new()),
        })
    }

    /// `Ok(None)` on 404, which ESI uses for unknown ids.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<Option<T>> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body = response
                    .json()
                    .await
                    .with_context(|| format!("decoding response of {url}"))?;
                Ok(Some(body))
            }
            status => Err(AdapterError::UnexpectedStatus { url, status }.into()),
        }
    }

    fn memoized(&self, system_id: u64) -> Option<StaticSystemInfo> {
        self.resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&system_id)
            .cloned()
    }
}

#[async_trait]
impl SystemRepository for EsiSystemRepo {
    #[instrument(level = "debug", skip(self))]
    async fn get_system_data(&self, system_id: u64) -> anyhow::Result<Option<StaticSystemInfo>> {
        if let Some(info) = self.memoized(system_id) {
            return Ok(Some(info));
        }

        let Some(system) = self
            .get_json::<EsiSystem>(&format!("universe/systems/{system_id}/"))
            .await?
        else {
            return Ok(None);
        };
        let constellation = self
            .get_json::<EsiConstellation>(&format!(
                "universe/constellations/{}/",
                system.constellation_id
            ))
            .await?
            .with_context(|| format!("constellation {} not found", system.constellation_id))?;
        let region = self
            .get_json::<EsiRegion>(&format!("universe/regions/{}/", constellation.region_id))
            .await?
            .with_context(|| format!("region {} not found", constellation.region_id))?;

        let info = StaticSystemInfo {
            id: system.system_id,
            name: system.name,
            true_sec: system.security_status,
            constellation: Constellation {
                id: constellation.constellation_id,
                region: Region {
                    id: region.region_id,
                    name: region.name,
                },
            },
        };

        debug!(name = %info.name, "resolved system");
        self.resolved
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(system_id, info.clone());

        Ok(Some(info))
    }
}
