use std::sync::Arc;

use sd_core::envelope::check_status;
use sd_core::ports::{ApiRequest, TransportPort};
use sd_core::CrawlRequest;
use serde_json::Value;
use tracing::info;

use crate::error::ProjectorResult;

/// Use case for queuing one run of a spider on a node.
///
/// Fire-and-forget from the projector's point of view: nothing local
/// changes, the caller gets the server's queuing confirmation.
pub struct EnqueueCrawl {
    transport: Arc<dyn TransportPort>,
}

impl EnqueueCrawl {
    pub fn from_ports(transport: Arc<dyn TransportPort>) -> Self {
        Self { transport }
    }

    #[tracing::instrument(
        name = "usecase.enqueue_crawl.execute",
        skip(self, request),
        fields(spider_id = %request.spider_id, node_id = %request.node_id)
    )]
    pub async fn execute(&self, request: CrawlRequest) -> ProjectorResult<Value> {
        let body = self
            .transport
            .send(ApiRequest::put("/tasks").with_json(&request)?)
            .await?;
        check_status(&body)?;
        info!("Crawl queued");
        Ok(body)
    }
}
