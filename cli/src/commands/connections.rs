use std::time::{Duration, Instant};

use colored::*;
use thera_common::config::Config;
use thera_common::connection::{ConnectionRecord, ConnectionTag};
use thera_core::endpoint::{ConnectionsEndpoint, ConnectionsResponse};
use thera_core::eve_scout::EveScoutClient;
use thera_core::fetcher::ConnectionFetcher;
use tracing::info;

use crate::commands::system_repository;
use crate::terminal::{format, print, spinner};

pub async fn connections(cfg: &Config, json: bool, watch: Option<u64>) -> anyhow::Result<()> {
    let source = EveScoutClient::new(cfg.eve_scout_url.clone(), cfg.request_timeout)?;
    let fetcher = ConnectionFetcher::new(Box::new(source), system_repository(cfg)?)
        .with_hub_system(cfg.hub_system_id);
    let endpoint = ConnectionsEndpoint::new(fetcher, cfg.cache.clone());

    let quiet = if json { cfg.quiet.max(1) } else { cfg.quiet };

    let Some(every) = watch else {
        return serve(&endpoint, json, quiet, cfg.quiet).await;
    };

    let mut ticker = tokio::time::interval(Duration::from_secs(every.max(1)));
    loop {
        tokio::select! {
            _ = ticker.tick() => serve(&endpoint, json, quiet, cfg.quiet).await?,
            _ = tokio::signal::ctrl_c() => {
                info!("stopped watching");
                return Ok(());
            }
        }
    }
}

/// Answers one request from the long-lived endpoint and renders it.
async fn serve(
    endpoint: &ConnectionsEndpoint,
    json: bool,
    spinner_quiet: u8,
    quiet: u8,
) -> anyhow::Result<()> {
    let spinner = spinner::start("Asking Eve-Scout for connections...", spinner_quiet);
    let start_time = Instant::now();

    let response = endpoint.get().await;

    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    print_response(&response, start_time.elapsed().as_secs_f64(), quiet);
    Ok(())
}

fn print_response(response: &ConnectionsResponse, elapsed: f64, quiet: u8) {
    if response.connections.is_empty() {
        print::no_results();
        return;
    }

    for (idx, connection) in response.connections.iter().enumerate() {
        if quiet > 1 {
            print::print_status(one_line(connection));
            continue;
        }
        print::tree_head(idx, &format::route(connection));
        print::as_tree_one_level(format::details(connection));
        if idx + 1 != response.connections.len() {
            print::println("");
        }
    }

    let count = format!("{} connections", response.connections.len()).bold().green();
    let expires = format!("{}s", response.expires_in.as_secs()).bold().yellow();
    let origin = if response.from_cache {
        "from cache".cyan()
    } else {
        format!("fetched in {elapsed:.2}s").bold().yellow()
    };
    print::fat_separator(quiet);
    print::print_status(format!("{count} {origin}, fresh for {expires}"));
}

fn one_line(connection: &ConnectionRecord) -> String {
    let eol = if connection.tags.contains(&ConnectionTag::Eol) {
        " EOL"
    } else {
        ""
    };
    format!("{}{}", format::route(connection), eol)
}
