use std::path::{Path, PathBuf};

use anyhow::Context;
use sd_core::config::AppConfig;
use sd_infra::config::{default_config_path, load_config};

/// The config file to use: the one given on the command line, otherwise the
/// platform default.
pub fn resolve_config_path(cli_path: Option<&Path>) -> anyhow::Result<PathBuf> {
    match cli_path {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path().context("Failed to locate default config file"),
    }
}

/// Loads `.env` into the process environment, then the layered config.
pub fn load_app_config(path: &Path) -> anyhow::Result<AppConfig> {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    load_config(Some(path))
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Reports where the configuration came from. Call once the subscriber is
/// installed.
pub fn log_config_source(path: &Path) {
    if path.is_file() {
        tracing::info!(path = %path.display(), "Loaded configuration file");
    } else {
        tracing::debug!(
            path = %path.display(),
            "No configuration file, using defaults and environment"
        );
    }
}
