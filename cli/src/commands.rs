pub mod connections;
pub mod system;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use thera_common::config::{
    CacheConfig, Config, DEFAULT_CACHE_KEY, DEFAULT_ESI_URL, DEFAULT_EVE_SCOUT_URL,
    THERA_SYSTEM_ID,
};
use thera_common::system::SystemRepository;
use thera_core::esi::EsiSystemRepo;
use thera_core::static_systems::StaticSystemRepo;

#[derive(Parser)]
#[command(name = "thera")]
#[command(about = "Current Thera wormhole connections, as reported by Eve-Scout.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the Eve-Scout API
    #[arg(long, global = true, default_value = DEFAULT_EVE_SCOUT_URL)]
    pub eve_scout_url: String,

    /// Base URL of ESI, used to resolve solar systems
    #[arg(long, global = true, default_value = DEFAULT_ESI_URL)]
    pub esi_url: String,

    /// Resolve solar systems from this JSON file instead of ESI
    #[arg(long, global = true)]
    pub systems: Option<PathBuf>,

    /// Only keep connections whose source is this system
    #[arg(long, global = true, default_value_t = THERA_SYSTEM_ID)]
    pub hub: u64,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, default_value_t = 20)]
    pub timeout: u64,

    /// Lifetime of cached connection data in seconds
    #[arg(long, global = true, default_value_t = 180)]
    pub ttl: u64,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Reduce output (-q, -qq)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List wormhole connections out of the hub system
    #[command(alias = "c")]
    Connections {
        /// Print the response body as JSON
        #[arg(long)]
        json: bool,
        /// Keep running and re-serve every SECONDS; upstream is only asked
        /// again once the cached list has expired
        #[arg(long, value_name = "SECONDS")]
        watch: Option<u64>,
    },
    /// Show static data for one solar system
    #[command(alias = "s")]
    System { id: u64 },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            hub_system_id: self.hub,
            eve_scout_url: self.eve_scout_url.clone(),
            esi_url: self.esi_url.clone(),
            systems_file: self.systems.clone(),
            request_timeout: Duration::from_secs(self.timeout),
            cache: CacheConfig {
                key: DEFAULT_CACHE_KEY.to_string(),
                ttl: Duration::from_secs(self.ttl),
            },
            quiet: self.quiet,
        }
    }
}

/// Picks the system lookup: a local file when given, ESI otherwise.
pub fn system_repository(cfg: &Config) -> anyhow::Result<Box<dyn SystemRepository>> {
    match &cfg.systems_file {
        Some(path) => Ok(Box::new(StaticSystemRepo::from_file(path)?)),
        None => Ok(Box::new(EsiSystemRepo::new(
            cfg.esi_url.clone(),
            cfg.request_timeout,
        )?)),
    }
}
