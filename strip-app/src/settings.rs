//! Layered tool settings: built-in defaults, an optional TOML file, and
//! environment-variable overrides.

use crate::error::AppError;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variables use this prefix, e.g. `VARIANT_STRIP_ENABLED=false`.
pub const ENV_PREFIX: &str = "VARIANT_STRIP_";

/// Tool defaults that can come from a settings file or the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripSettings {
    /// Master toggle; `false` makes every filter call pass through.
    pub enabled: bool,
    /// Drop exact-duplicate keyword combinations during log ingestion.
    pub dedupe_combinations: bool,
}

impl Default for StripSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            dedupe_combinations: false,
        }
    }
}

/// Loads settings, layering (lowest to highest precedence): defaults, the
/// optional TOML file, `VARIANT_STRIP_*` environment variables.
pub fn load_settings(path: Option<&Path>) -> Result<StripSettings, AppError> {
    let mut figment = Figment::from(Serialized::defaults(StripSettings::default()));
    if let Some(path) = path {
        figment = figment.merge(Toml::file(path));
    }
    figment = figment.merge(Env::prefixed(ENV_PREFIX));
    figment
        .extract()
        .map_err(|e| AppError::Config(e.to_string()))
}
