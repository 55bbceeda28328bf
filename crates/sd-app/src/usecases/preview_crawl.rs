use std::sync::Arc;

use sd_core::envelope::decode_items;
use sd_core::ports::{resource_path, ApiRequest, StorePort, TransportPort};
use sd_core::state::{SpiderMutation, SpiderState};
use sd_core::SpiderId;
use serde_json::Value;
use tracing::info;

use crate::error::ProjectorResult;

/// Use case for a dry-run crawl of a configurable spider.
///
/// The preview endpoint answers with rows at the top level (`items`),
/// not inside `data`. The rows replace any previous preview.
pub struct PreviewCrawl {
    transport: Arc<dyn TransportPort>,
    store: Arc<dyn StorePort<SpiderState>>,
}

impl PreviewCrawl {
    pub fn from_ports(
        transport: Arc<dyn TransportPort>,
        store: Arc<dyn StorePort<SpiderState>>,
    ) -> Self {
        Self { transport, store }
    }

    #[tracing::instrument(
        name = "usecase.preview_crawl.execute",
        skip(self),
        fields(spider_id = %id)
    )]
    pub async fn execute(&self, id: &SpiderId) -> ProjectorResult<()> {
        let body = self
            .transport
            .send(ApiRequest::post(resource_path(&["spiders", id.as_str(), "preview_crawl"])))
            .await?;
        let rows: Vec<Value> = decode_items(body)?;

        info!(rows = rows.len(), "Preview crawl finished");
        self.store.dispatch(SpiderMutation::SetPreviewCrawlData(rows));
        Ok(())
    }
}
