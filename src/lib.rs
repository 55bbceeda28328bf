//! spiderdeck
//!
//! Command-line front end for the spider projector. The process is the UI
//! context: it owns one workbench for the duration of a command, and Ctrl-C
//! tears it down.

pub mod bootstrap;
pub mod cli;

use cli::{Cli, Command, ConfigCommand};
use sd_app::SpiderWorkbench;
use sd_core::config::AppConfig;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Runs one parsed command line and returns what should be printed.
pub async fn run(cli: Cli) -> anyhow::Result<Value> {
    let config_path = bootstrap::resolve_config_path(cli.config.as_deref())?;

    if let Command::Config(ConfigCommand::Init { force }) = &cli.command {
        return cli::init_config(&config_path, *force);
    }

    let mut config = bootstrap::load_app_config(&config_path)?;
    cli.apply_overrides(&mut config);

    if let Command::Config(ConfigCommand::Show) = &cli.command {
        return Ok(serde_json::to_value(&config)?);
    }

    bootstrap::init_tracing_subscriber(&config.log)?;
    bootstrap::log_config_source(&config_path);

    let shutdown = CancellationToken::new();
    cancel_on_ctrl_c(shutdown.clone());

    run_with_config(cli.command, &config, &shutdown).await
}

/// Wires a workbench bound to `shutdown` and runs a network command on it.
pub async fn run_with_config(
    command: Command,
    config: &AppConfig,
    shutdown: &CancellationToken,
) -> anyhow::Result<Value> {
    let workbench = SpiderWorkbench::bound_to(bootstrap::wire_dependencies(&config.api)?, shutdown);
    let result = cli::execute(command, &workbench, config).await;
    workbench.teardown();
    result
}

fn cancel_on_ctrl_c(shutdown: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, discarding pending requests");
            shutdown.cancel();
        }
    });
}
