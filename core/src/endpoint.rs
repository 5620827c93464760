//! The read operation served to callers: cached, normalized connections.

use std::time::Duration;

use serde::Serialize;
use tracing::instrument;

use thera_common::config::CacheConfig;
use thera_common::connection::ConnectionRecord;

use crate::cache::ResponseCache;
use crate::fetcher::ConnectionFetcher;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionsResponse {
    pub connections: Vec<ConnectionRecord>,
    /// Expiry hint for the response, equal to the cache entry's remaining TTL.
    #[serde(skip)]
    pub expires_in: Duration,
    /// Whether the connections came from cache rather than a fresh fetch.
    #[serde(skip)]
    pub from_cache: bool,
}

pub struct ConnectionsEndpoint {
    fetcher: ConnectionFetcher,
    cache: ResponseCache<Vec<ConnectionRecord>>,
}

impl ConnectionsEndpoint {
    pub fn new(fetcher: ConnectionFetcher, cache: CacheConfig) -> Self {
        Self {
            fetcher,
            cache: ResponseCache::new(cache),
        }
    }

    /// Serves from cache, fetching upstream only when the entry is missing or stale.
    #[instrument(level = "debug", skip(self), fields(key = %self.cache.config().key))]
    pub async fn get(&self) -> ConnectionsResponse {
        let cached = self.cache.get_or_fill(|| self.fetcher.fetch()).await;

        ConnectionsResponse {
            connections: cached.value,
            expires_in: cached.expires_in,
            from_cache: cached.hit,
        }
    }
}
