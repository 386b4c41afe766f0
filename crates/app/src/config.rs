//! Environment-driven configuration.

use serde::{Deserialize, Serialize};

use fleet_observability::LogFormat;

pub const SEED_DEMO_VAR: &str = "FLEET_SEED_DEMO";
pub const LOG_FORMAT_VAR: &str = "FLEET_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Register the demo fleet at startup.
    pub seed_demo: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_demo: true,
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    /// Read the process environment. Also returns a note for every variable
    /// that was set but unparseable; those fall back to the default.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let defaults = Self::default();
        let mut fallbacks = Vec::new();

        let seed_demo = match lookup(SEED_DEMO_VAR) {
            None => defaults.seed_demo,
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                fallbacks.push(format!(
                    "{SEED_DEMO_VAR}={raw:?} is not a boolean; using {}",
                    defaults.seed_demo
                ));
                defaults.seed_demo
            }),
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => defaults.log_format,
            Some(raw) => LogFormat::parse(&raw).unwrap_or_else(|| {
                fallbacks.push(format!(
                    "{LOG_FORMAT_VAR}={raw:?} is not one of json, pretty; using {:?}",
                    defaults.log_format
                ));
                defaults.log_format
            }),
        };

        (
            Self {
                seed_demo,
                log_format,
            },
            fallbacks,
        )
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
