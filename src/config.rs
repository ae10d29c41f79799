//! Column conversion settings.
//!
//! [`ColumnConfig::load`] reads the `columns` section from `config/config.toml`
//! or environment variables (`LIFEGUARD__COLUMNS__NUMERIC_TEXT=true`), the same
//! layout the rest of Lifeguard's configuration uses.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const CONFIG_FILE: &str = "config/config.toml";
const ENV_PREFIX: &str = "LIFEGUARD";
const SECTION: &str = "columns";

/// Conversion switches applied by every column built with them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Let numeric columns parse numeric text (`"3.14"`); non-numeric text still fails
    pub numeric_text: bool,
    /// Store NaN as SQL `NULL` instead of rejecting it
    pub nan_as_null: bool,
}

impl ColumnConfig {
    /// Load from `config/config.toml`, falling back to env vars, then to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        let settings = match builder.build() {
            Ok(cfg) => cfg,
            Err(err) => {
                if std::path::Path::new(CONFIG_FILE).exists() {
                    log::warn!("failed to load {CONFIG_FILE}, falling back to env: {err}");
                }
                Config::builder()
                    .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
                    .build()
                    .map_err(|env_err| {
                        ConfigError::Message(format!(
                            "Failed to load configuration from file and env: {err}, then env-only error: {env_err}"
                        ))
                    })?
            }
        };

        Self::from_config(&settings)
    }

    /// Read the `columns` section of an already built configuration.
    ///
    /// A missing section yields the defaults.
    pub fn from_config(settings: &Config) -> Result<Self, ConfigError> {
        match settings.get::<ColumnConfig>(SECTION) {
            Ok(config) => Ok(config),
            Err(ConfigError::NotFound(_)) => Ok(ColumnConfig::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "Column configuration could not be loaded: {e}"
            ))),
        }
    }
}
