use std::sync::Arc;

use sd_core::envelope::decode_data_or_default;
use sd_core::ports::{ApiRequest, StorePort, TransportPort};
use sd_core::state::{SpiderMutation, SpiderState};
use sd_core::SpiderTypeCount;

use crate::error::ProjectorResult;

/// Use case for loading the spider types with their counts.
pub struct ListSpiderTypes {
    transport: Arc<dyn TransportPort>,
    store: Arc<dyn StorePort<SpiderState>>,
}

impl ListSpiderTypes {
    pub fn from_ports(
        transport: Arc<dyn TransportPort>,
        store: Arc<dyn StorePort<SpiderState>>,
    ) -> Self {
        Self { transport, store }
    }

    #[tracing::instrument(name = "usecase.list_spider_types.execute", skip(self))]
    pub async fn execute(&self) -> ProjectorResult<()> {
        let body = self.transport.send(ApiRequest::get("/spider/types")).await?;
        let types: Vec<SpiderTypeCount> = decode_data_or_default(body)?;
        self.store.dispatch(SpiderMutation::SetSpiderTypes(types));
        Ok(())
    }
}
