//! Optional TOML configuration file.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use bugs_life_core::Tuning;
use bugs_life_engine::Config;
use serde::Deserialize;

/// Contents of a configuration file.
///
/// ```toml
/// seed = 42
///
/// [tuning]
/// food_rate = 0.5
/// birth_rate = 0.001
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    seed: Option<u64>,
    tuning: Tuning,
}

impl Settings {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Builds the simulation configuration; a seed given on the command line wins.
    pub(crate) fn into_config(self, seed: Option<u64>) -> Config {
        let default = Config::default();
        let seed = seed.or(self.seed).unwrap_or(default.seed());
        Config::new(self.tuning, seed)
    }
}
