use std::sync::Arc;

use sd_core::envelope::check_status;
use sd_core::ports::{resource_path, ApiRequest, StorePort, TransportPort};
use sd_core::state::SpiderState;
use sd_core::{SpiderId, SpiderListQuery};
use tracing::info;

use super::list_spiders::ListSpiders;
use crate::error::ProjectorResult;

/// Use case for deleting a spider.
/// On success the collection is reloaded without parameters.
pub struct DeleteSpider {
    transport: Arc<dyn TransportPort>,
    list: ListSpiders,
}

impl DeleteSpider {
    pub fn from_ports(
        transport: Arc<dyn TransportPort>,
        store: Arc<dyn StorePort<SpiderState>>,
    ) -> Self {
        let list = ListSpiders::from_ports(transport.clone(), store);
        Self { transport, list }
    }

    #[tracing::instrument(
        name = "usecase.delete_spider.execute",
        skip(self),
        fields(spider_id = %id)
    )]
    pub async fn execute(&self, id: &SpiderId) -> ProjectorResult<()> {
        let body = self
            .transport
            .send(ApiRequest::delete(resource_path(&["spiders", id.as_str()])))
            .await?;
        check_status(&body)?;
        info!(spider_id = %id, "Deleted spider, reloading list");

        self.list.execute(SpiderListQuery::default()).await
    }
}
