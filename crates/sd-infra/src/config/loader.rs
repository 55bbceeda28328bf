//! # Configuration Loader
//!
//! Builds an [`AppConfig`] from three layers, later ones winning:
//!
//! 1. built-in defaults
//! 2. an optional TOML file
//! 3. `SPIDERDECK__*` environment variables, `__` separating sections
//!    (`SPIDERDECK__API__BASE_URL`)
//!
//! No validation happens here; whatever the layers say is the config.
//! Nothing is logged either: loading runs before the subscriber exists.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use sd_core::config::AppConfig;
use thiserror::Error;

const ENV_PREFIX: &str = "SPIDERDECK";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("failed to render configuration as TOML: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("failed to write configuration to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no configuration directory on this platform")]
    NoConfigDir,
}

/// `<config dir>/spiderdeck/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigLoadError> {
    dirs::config_dir()
        .map(|dir| dir.join("spiderdeck").join("config.toml"))
        .ok_or(ConfigLoadError::NoConfigDir)
}

/// Loads layered configuration. A missing file is not an error.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigLoadError> {
    let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<AppConfig>()?;

    Ok(config)
}

/// Writes the built-in defaults to `path`, creating parent directories.
pub fn write_default_config(path: &Path) -> Result<(), ConfigLoadError> {
    let rendered = toml::to_string_pretty(&AppConfig::default())?;
    let write_err = |source: std::io::Error| ConfigLoadError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, rendered).map_err(write_err)?;
    Ok(())
}
