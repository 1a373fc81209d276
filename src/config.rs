use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::MatchWeights;

/// Engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Page size the embedding caller typically renders. The engine itself
    /// returns full ranked sequences; truncation is the caller's job.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    5
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// File/env representation of the scoring weights.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_exchange")]
    pub skill_exchange: f64,
    #[serde(default = "default_shared_interest")]
    pub shared_interest: f64,
    #[serde(default = "default_proximity_max")]
    pub proximity_max: f64,
    #[serde(default = "default_proximity_falloff")]
    pub proximity_falloff: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill_exchange: default_skill_exchange(),
            shared_interest: default_shared_interest(),
            proximity_max: default_proximity_max(),
            proximity_falloff: default_proximity_falloff(),
        }
    }
}

impl From<WeightsConfig> for MatchWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            skill_exchange: config.skill_exchange,
            shared_interest: config.shared_interest,
            proximity_max: config.proximity_max,
            proximity_falloff: config.proximity_falloff,
        }
    }
}

fn default_skill_exchange() -> f64 { 20.0 }
fn default_shared_interest() -> f64 { 5.0 }
fn default_proximity_max() -> f64 { 15.0 }
fn default_proximity_falloff() -> f64 { 3.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with TANDEM_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TANDEM_SCORING__WEIGHTS__SKILL_EXCHANGE -> scoring.weights.skill_exchange
            .add_source(
                Environment::with_prefix("TANDEM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TANDEM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
