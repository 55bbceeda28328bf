use std::sync::Arc;

use anyhow::Context;
use sd_app::SpiderDeps;
use sd_core::config::ApiConfig;
use sd_core::state::{SpiderState, TaskState};
use sd_infra::http::ReqwestTransport;
use sd_infra::store::WatchStore;

/// Builds the projector's dependencies from API settings: one HTTP client
/// and a fresh, empty store per namespace.
pub fn wire_dependencies(api: &ApiConfig) -> anyhow::Result<SpiderDeps> {
    let transport = ReqwestTransport::new(api).context("Failed to build HTTP transport")?;
    tracing::debug!(base_url = %api.base_url, "Wired HTTP transport");

    Ok(SpiderDeps {
        transport: Arc::new(transport),
        spider_store: Arc::new(WatchStore::<SpiderState>::new()),
        task_store: Arc::new(WatchStore::<TaskState>::new()),
    })
}
