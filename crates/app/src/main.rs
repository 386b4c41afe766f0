use anyhow::Context;

use fleet_app::{AppConfig, bootstrap};

fn main() -> anyhow::Result<()> {
    let (config, fallbacks) = AppConfig::from_env();
    fleet_observability::tracing::init(config.log_format);
    for note in fallbacks {
        tracing::warn!("{note}");
    }

    let registry = bootstrap(&config).context("failed to build ship registry")?;
    tracing::info!(ships = registry.len(), seed_demo = config.seed_demo, "registry ready");

    let snapshot = serde_json::to_string_pretty(&registry.snapshot())
        .context("failed to serialize registry snapshot")?;
    println!("{snapshot}");

    Ok(())
}
