//! Process wiring for the fleet registry: configuration, startup seeding.

pub mod config;
pub mod seed;

pub use config::AppConfig;

use fleet_core::FleetResult;
use fleet_registry::InMemoryShipRegistry;

/// Build the process-wide registry according to `config`.
pub fn bootstrap(config: &AppConfig) -> FleetResult<InMemoryShipRegistry> {
    let registry = InMemoryShipRegistry::new();
    if config.seed_demo {
        let seeded = seed::seed_demo_fleet(&registry)?;
        tracing::info!(ships = seeded.len(), "demo fleet registered");
    }
    Ok(registry)
}
