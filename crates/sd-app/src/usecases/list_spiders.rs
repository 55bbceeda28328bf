use std::sync::Arc;

use sd_core::envelope::{decode_page, Page};
use sd_core::ports::{ApiRequest, StorePort, TransportPort};
use sd_core::state::{SpiderMutation, SpiderState};
use sd_core::{Spider, SpiderListQuery};
use tracing::{debug, info};

use crate::error::ProjectorResult;

/// Use case for loading one page of the spider collection.
///
/// On success the page replaces `spider_list` and `spider_total` in one
/// mutation. On failure the previous page stays projected.
#[derive(Clone)]
pub struct ListSpiders {
    transport: Arc<dyn TransportPort>,
    store: Arc<dyn StorePort<SpiderState>>,
}

impl ListSpiders {
    pub fn from_ports(
        transport: Arc<dyn TransportPort>,
        store: Arc<dyn StorePort<SpiderState>>,
    ) -> Self {
        Self { transport, store }
    }

    #[tracing::instrument(name = "usecase.list_spiders.execute", skip(self, query))]
    pub async fn execute(&self, query: SpiderListQuery) -> ProjectorResult<()> {
        let request = ApiRequest::get("/spiders").with_query(query.to_query_pairs());
        debug!(query = ?request.query, "Requesting spider page");

        let body = self.transport.send(request).await?;
        let Page { list, total } = decode_page::<Spider>(body)?;

        info!(rows = list.len(), total, "Projected spider page");
        self.store
            .dispatch(SpiderMutation::SetSpiderPage { list, total });
        Ok(())
    }
}
