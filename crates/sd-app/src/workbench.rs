//! # Spider Workbench
//!
//! Owns the spider projector together with the sibling task store. Results
//! that belong to another namespace are routed here instead of being
//! written by the projector itself.

use std::sync::Arc;

use sd_core::ports::StorePort;
use sd_core::state::{TaskMutation, TaskState};
use sd_core::SpiderId;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::deps::SpiderDeps;
use crate::error::ProjectorResult;
use crate::projector::SpiderProjector;

pub struct SpiderWorkbench {
    projector: SpiderProjector,
    task_store: Arc<dyn StorePort<TaskState>>,
}

impl SpiderWorkbench {
    pub fn new(deps: SpiderDeps) -> Self {
        Self::bound_to(deps, &CancellationToken::new())
    }

    pub fn bound_to(deps: SpiderDeps, parent: &CancellationToken) -> Self {
        let SpiderDeps {
            transport,
            spider_store,
            task_store,
        } = deps;

        Self {
            projector: SpiderProjector::bound_to(transport, spider_store, parent),
            task_store,
        }
    }

    pub fn projector(&self) -> &SpiderProjector {
        &self.projector
    }

    pub fn tasks(&self) -> TaskState {
        self.task_store.snapshot()
    }

    /// Fetches the spider's related tasks and replaces the task list with
    /// them. Returns how many were stored.
    #[tracing::instrument(name = "workbench.refresh_tasks", skip(self), fields(spider_id = %id))]
    pub async fn refresh_tasks(&self, id: &SpiderId) -> ProjectorResult<usize> {
        let tasks = self.projector.list_related_tasks(id).await?;
        let count = tasks.len();
        self.task_store.dispatch(TaskMutation::SetTaskList(tasks));
        Ok(count)
    }

    /// Loads everything the detail screen shows: the item, its tasks and
    /// its stats. Requests run concurrently; the first failure drops the
    /// ones still pending.
    #[tracing::instrument(name = "workbench.open_spider", skip(self), fields(spider_id = %id))]
    pub async fn open_spider(&self, id: &SpiderId) -> ProjectorResult<()> {
        futures::try_join!(
            self.projector.load(id),
            self.refresh_tasks(id),
            self.projector.refresh_stats(id),
        )?;
        info!("Spider opened");
        Ok(())
    }

    pub fn teardown(&self) {
        self.projector.teardown();
    }
}
