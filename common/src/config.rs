use std::path::PathBuf;
use std::time::Duration;

/// Solar system id of Thera, the only accepted connection source.
pub const THERA_SYSTEM_ID: u64 = 31000005;

pub const DEFAULT_EVE_SCOUT_URL: &str = "https://www.eve-scout.com";
pub const DEFAULT_ESI_URL: &str = "https://esi.evetech.net/latest";

pub const DEFAULT_CACHE_KEY: &str = "CACHED_THERA_CONNECTIONS";
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 3);

#[derive(Debug, Clone)]
pub struct Config {
    /// Connections whose source is not this system are dropped.
    pub hub_system_id: u64,
    pub eve_scout_url: String,
    pub esi_url: String,
    /// When set, static system data is read from this JSON file instead of ESI.
    pub systems_file: Option<PathBuf>,
    /// Applied to every outbound HTTP request.
    pub request_timeout: Duration,
    pub cache: CacheConfig,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hub_system_id: THERA_SYSTEM_ID,
            eve_scout_url: DEFAULT_EVE_SCOUT_URL.to_string(),
            esi_url: DEFAULT_ESI_URL.to_string(),
            systems_file: None,
            request_timeout: Duration::from_secs(20),
            cache: CacheConfig::default(),
            quiet: 0,
        }
    }
}

/// Key and lifetime under which the normalized connection list is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub key: String,
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_CACHE_KEY.to_string(),
            ttl: DEFAULT_CACHE_TTL,
        }
    }
}
