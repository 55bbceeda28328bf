//! # Spider Projector
//!
//! Facade over the spider use cases. A projector owns the spider store it
//! was given and a cancellation token standing for the lifetime of the UI
//! context that created it.
//!
//! ## Cancellation
//!
//! Every operation races against the token. After [`teardown`] an
//! in-flight operation is dropped at its pending request, before it can
//! dispatch anything, and later calls fail with
//! [`ProjectorError::Cancelled`] without touching the network.
//!
//! ## Ordering
//!
//! Concurrent operations are not ordered against each other: when two
//! requests that write the same slice of state are in flight, the one that
//! completes last wins.
//!
//! [`teardown`]: SpiderProjector::teardown

use std::future::Future;
use std::sync::Arc;

use sd_core::ports::{StorePort, TransportPort};
use sd_core::state::{SpiderMutation, SpiderState};
use sd_core::{
    CrawlRequest, ImportForm, Node, NodeId, Spider, SpiderId, SpiderListQuery, Task,
};
use serde_json::Value;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::{ProjectorError, ProjectorResult};
use crate::usecases::*;

pub struct SpiderProjector {
    transport: Arc<dyn TransportPort>,
    store: Arc<dyn StorePort<SpiderState>>,
    cancel: CancellationToken,
}

impl SpiderProjector {
    pub fn new(
        transport: Arc<dyn TransportPort>,
        store: Arc<dyn StorePort<SpiderState>>,
    ) -> Self {
        Self::with_token(transport, store, CancellationToken::new())
    }

    /// Creates a projector whose lifetime ends when `parent` is cancelled.
    pub fn bound_to(
        transport: Arc<dyn TransportPort>,
        store: Arc<dyn StorePort<SpiderState>>,
        parent: &CancellationToken,
    ) -> Self {
        Self::with_token(transport, store, parent.child_token())
    }

    fn with_token(
        transport: Arc<dyn TransportPort>,
        store: Arc<dyn StorePort<SpiderState>>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            transport,
            store,
            cancel,
        }
    }

    pub fn state(&self) -> SpiderState {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SpiderState> {
        self.store.subscribe()
    }

    /// Ends the projector's lifetime; pending continuations are discarded.
    pub fn teardown(&self) {
        if !self.cancel.is_cancelled() {
            info!("Tearing down spider projector");
            self.cancel.cancel();
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    async fn guard<T, F>(&self, op: &'static str, fut: F) -> ProjectorResult<T>
    where
        F: Future<Output = ProjectorResult<T>>,
    {
        if self.cancel.is_cancelled() {
            return Err(ProjectorError::Cancelled);
        }
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                debug!(op, "Discarded in-flight operation after teardown");
                Err(ProjectorError::Cancelled)
            }
            result = fut => result,
        }
    }

    // ── Collection ──────────────────────────────────────────────

    pub async fn list(&self, query: SpiderListQuery) -> ProjectorResult<()> {
        let use_case = ListSpiders::from_ports(self.transport.clone(), self.store.clone());
        self.guard("list", use_case.execute(query)).await
    }

    /// Lists one page with the current filter state folded in.
    pub async fn list_filtered(&self, page_num: u32, page_size: u32) -> ProjectorResult<()> {
        let filter = self.store.snapshot().filter;
        self.list(SpiderListQuery::page(page_num, page_size).with_filter(&filter))
            .await
    }

    pub async fn delete(&self, id: &SpiderId) -> ProjectorResult<()> {
        let use_case = DeleteSpider::from_ports(self.transport.clone(), self.store.clone());
        self.guard("delete", use_case.execute(id)).await
    }

    pub async fn list_types(&self) -> ProjectorResult<()> {
        let use_case = ListSpiderTypes::from_ports(self.transport.clone(), self.store.clone());
        self.guard("list_types", use_case.execute()).await
    }

    // ── Active item ─────────────────────────────────────────────

    pub async fn load(&self, id: &SpiderId) -> ProjectorResult<()> {
        let use_case = LoadSpider::from_ports(self.transport.clone(), self.store.clone());
        self.guard("load", use_case.execute(id)).await
    }

    pub async fn save(&self) -> ProjectorResult<()> {
        let use_case = SaveSpider::from_ports(self.transport.clone(), self.store.clone());
        self.guard("save", use_case.execute()).await
    }

    pub async fn refresh_stats(&self, id: &SpiderId) -> ProjectorResult<()> {
        let use_case = RefreshSpiderStats::from_ports(self.transport.clone(), self.store.clone());
        self.guard("refresh_stats", use_case.execute(id)).await
    }

    pub async fn preview_execution(&self, id: &SpiderId) -> ProjectorResult<()> {
        let use_case = PreviewCrawl::from_ports(self.transport.clone(), self.store.clone());
        self.guard("preview_execution", use_case.execute(id)).await
    }

    pub async fn extract_schema(&self, id: &SpiderId) -> ProjectorResult<Value> {
        let use_case = ExtractFields::from_ports(self.transport.clone());
        self.guard("extract_schema", use_case.execute(id)).await
    }

    pub async fn publish(&self, id: &SpiderId) -> ProjectorResult<()> {
        let use_case = PublishSpider::from_ports(self.transport.clone());
        self.guard("publish", use_case.execute(id)).await
    }

    // ── Runs ────────────────────────────────────────────────────

    pub async fn enqueue(
        &self,
        id: &SpiderId,
        node: &NodeId,
        param: impl Into<String>,
    ) -> ProjectorResult<Value> {
        let request = CrawlRequest {
            spider_id: id.clone(),
            node_id: node.clone(),
            param: param.into(),
        };
        let use_case = EnqueueCrawl::from_ports(self.transport.clone());
        self.guard("enqueue", use_case.execute(request)).await
    }

    /// Fetches the spider's tasks, newest first, without storing them.
    pub async fn list_related_tasks(&self, id: &SpiderId) -> ProjectorResult<Vec<Task>> {
        let use_case = ListSpiderTasks::from_ports(self.transport.clone());
        self.guard("list_related_tasks", use_case.execute(id)).await
    }

    // ── Import ──────────────────────────────────────────────────

    pub async fn import_from_external_source(&self) -> ProjectorResult<Value> {
        let use_case = ImportSpider::from_ports(self.transport.clone(), self.store.clone());
        self.guard("import", use_case.execute()).await
    }

    // ── Source files ────────────────────────────────────────────

    pub async fn browse_dir(&self, id: &SpiderId, path: &str) -> ProjectorResult<()> {
        let use_case = BrowseSpiderDir::from_ports(self.transport.clone(), self.store.clone());
        self.guard("browse_dir", use_case.execute(id, path)).await
    }

    pub async fn read_file(&self, id: &SpiderId, path: &str) -> ProjectorResult<String> {
        let use_case = ReadSpiderFile::from_ports(self.transport.clone());
        self.guard("read_file", use_case.execute(id, path)).await
    }

    pub async fn write_file(&self, id: &SpiderId, path: &str, content: &str) -> ProjectorResult<()> {
        let use_case = WriteSpiderFile::from_ports(self.transport.clone());
        self.guard("write_file", use_case.execute(id, path, content))
            .await
    }

    // ── Local edits ─────────────────────────────────────────────

    pub fn set_filter_site(&self, site: impl Into<String>) {
        self.store.dispatch(SpiderMutation::SetFilterSite(site.into()));
    }

    pub fn set_import_form(&self, form: ImportForm) {
        self.store.dispatch(SpiderMutation::SetImportForm(form));
    }

    pub fn set_active_node(&self, node: Option<Node>) {
        self.store.dispatch(SpiderMutation::SetActiveNode(node));
    }

    /// Replaces the active detail with an edited copy, ahead of [`save`](Self::save).
    pub fn set_spider_form(&self, spider: Spider) {
        self.store.dispatch(SpiderMutation::SetSpiderForm(spider));
    }
}
