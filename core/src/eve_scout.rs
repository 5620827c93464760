//! Eve-Scout HTTP client.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use thera_common::source::{ConnectionSource, Operation};

pub struct EveScoutClient {
    client: Client,
    base_url: String,
}

impl EveScoutClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("thera/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build eve-scout http client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, operation: Operation) -> String {
        let base = self.base_url.trim_end_matches('/');
        match operation {
            Operation::TheraConnections => format!("{base}/api/wormholes"),
        }
    }
}

#[async_trait]
impl ConnectionSource for EveScoutClient {
    #[instrument(level = "debug", skip(self), fields(op = operation.name()))]
    async fn send(&self, operation: Operation) -> anyhow::Result<Value> {
        let url = self.url(operation);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "eve-scout request failed");
            return Ok(json!({ "error": status.to_string() }));
        }

        let body: Value = response
            .json()
            .await
            .with_context(|| format!("decoding response of {url}"))?;

        Ok(into_response(body))
    }
}

/// Wraps a bare list body as `{"connections": [...]}`; objects pass through.
pub fn into_response(body: Value) -> Value {
    match body {
        Value::Array(connections) => json!({ "connections": connections }),
        other => other,
    }
}
