//! Time-bounded response cache.
//!
//! Values live under a string key for the configured TTL. Callers get the
//! value back together with how long it stays valid, which is what the
//! serving layer reports as the response expiry.

use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::debug;

use thera_common::config::CacheConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Cached<T> {
    pub value: T,
    /// Remaining lifetime: the full TTL right after a refill.
    pub expires_in: Duration,
    pub hit: bool,
}

struct Entry<T> {
    value: T,
    stored_at: Instant,
}

pub struct ResponseCache<T> {
    config: CacheConfig,
    entries: Mutex<HashMap<String, Entry<T>>>,
}

impl<T: Clone> ResponseCache<T> {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns the live value under the configured key, calling `fill` on a miss.
    ///
    /// The lock is held across `fill`, so concurrent misses fill once.
    pub async fn get_or_fill<F, Fut>(&self, fill: F) -> Cached<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.get_or_fill_at(Instant::now(), fill).await
    }

    pub async fn get_or_fill_at<F, Fut>(&self, now: Instant, fill: F) -> Cached<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let ttl = self.config.ttl;
        let mut entries = self.entries.lock().await;

        if let Some(entry) = entries.get(&self.config.key) {
            let age = now.saturating_duration_since(entry.stored_at);
            if age < ttl {
                debug!(key = %self.config.key, "cache hit");
                return Cached {
                    value: entry.value.clone(),
                    expires_in: ttl - age,
                    hit: true,
                };
            }
        }

        debug!(key = %self.config.key, "cache miss");
        let value = fill().await;
        entries.insert(
            self.config.key.clone(),
            Entry {
                value: value.clone(),
                stored_at: now,
            },
        );

        Cached {
            value,
            expires_in: ttl,
            hit: false,
        }
    }
}
