//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every section carries serde defaults so that an empty source
//! set still produces a usable configuration.

pub mod converter;
pub mod host;
pub mod logging;
pub mod menu;

use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

use self::converter::ConverterConfig;
use self::host::HostConfig;
use self::logging::LoggingConfig;
use self::menu::MenuConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`STLSTEP__CONVERTER__TOOL_SUBDIR`).
pub const ENV_PREFIX: &str = "STLSTEP";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// External converter settings.
    #[serde(default)]
    #[validate(nested)]
    pub converter: ConverterConfig,
    /// Menu presentation settings.
    #[serde(default)]
    pub menu: MenuConfig,
    /// Settings for the local host harness.
    #[serde(default)]
    pub host: HostConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default.toml`, the `config/{env}.toml` overlay, an
    /// optional explicit file and finally environment variables prefixed
    /// with `STLSTEP`. The merged result is validated before it is returned.
    pub fn load(env: &str, explicit: Option<&Path>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }
}
