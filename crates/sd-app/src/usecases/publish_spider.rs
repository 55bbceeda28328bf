use std::sync::Arc;

use sd_core::envelope::check_status;
use sd_core::ports::{resource_path, ApiRequest, TransportPort};
use sd_core::SpiderId;
use tracing::info;

use crate::error::ProjectorResult;

/// Use case for deploying a spider's current source to every node.
pub struct PublishSpider {
    transport: Arc<dyn TransportPort>,
}

impl PublishSpider {
    pub fn from_ports(transport: Arc<dyn TransportPort>) -> Self {
        Self { transport }
    }

    #[tracing::instrument(
        name = "usecase.publish_spider.execute",
        skip(self),
        fields(spider_id = %id)
    )]
    pub async fn execute(&self, id: &SpiderId) -> ProjectorResult<()> {
        let body = self
            .transport
            .send(ApiRequest::post(resource_path(&["spiders", id.as_str(), "publish"])))
            .await?;
        check_status(&body)?;
        info!(spider_id = %id, "Spider published");
        Ok(())
    }
}
