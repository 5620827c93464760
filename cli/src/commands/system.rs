use anyhow::bail;
use thera_common::config::Config;
use thera_common::system::SystemRepository;
use thera_core::normalizer;

use crate::commands::system_repository;
use crate::terminal::{format, print};

pub async fn system(cfg: &Config, id: u64) -> anyhow::Result<()> {
    let repo = system_repository(cfg)?;

    let Some(info) = repo.get_system_data(id).await? else {
        bail!("unknown solar system {id}");
    };

    let snapshot = normalizer::system_snapshot(&info);
    print::set_key_width(13);
    print::aligned_line("Name", snapshot.name.as_str());
    print::aligned_line("Id", snapshot.id.to_string());
    print::aligned_line("Security", format::security(snapshot.system_class));
    print::aligned_line("Constellation", snapshot.constellation.id.to_string());
    print::aligned_line(
        "Region",
        format!("{} ({})", snapshot.region.name, snapshot.region.id),
    );
    Ok(())
}
