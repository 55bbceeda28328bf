//! Tracing configuration for spiderdeck
//!
//! - `tracing` events and spans from the app layer go straight to the
//!   subscriber
//! - `log` records from the infra layer are bridged through `tracing-log`
//! - output goes to stderr so stdout carries only command results, plus an
//!   optional non-blocking file when `log.file` is configured

use std::{fs, io, path::Path, sync::OnceLock};

use anyhow::Context;
use sd_core::config::LogConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Default filter directives, used when `RUST_LOG` is not set.
///
/// HTTP internals stay at `warn` unless the whole process is at `trace`.
fn build_filter_directives(level: &str) -> Vec<String> {
    let noisy = if level == "trace" { "trace" } else { "warn" };
    vec![
        level.to_string(),
        format!("sd_app={level}"),
        format!("sd_infra={level}"),
        format!("hyper={noisy}"),
        format!("reqwest={noisy}"),
        format!("rustls={noisy}"),
    ]
}

/// Installs the global subscriber. Call once, before any command runs.
///
/// `RUST_LOG` overrides the configured level entirely.
pub fn init_tracing_subscriber(config: &LogConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(&config.level).join(",")));

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr));

    let file_layer = match config.file.as_deref().map(build_file_writer).transpose() {
        Ok(writer) => writer.map(|writer| {
            fmt::layer()
                .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
        }),
        Err(err) => {
            eprintln!("Failed to initialize file logging, continuing with stderr only: {err:#}");
            None
        }
    };

    tracing_log::LogTracer::init().context("Failed to bridge log records into tracing")?;

    let subscriber = registry().with(env_filter).with(stderr_layer).with(file_layer);
    tracing::subscriber::set_global_default(subscriber)
        .context("Tracing subscriber already installed")?;

    Ok(())
}

fn build_file_writer(path: &Path) -> anyhow::Result<NonBlocking> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
