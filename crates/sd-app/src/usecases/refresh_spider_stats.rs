use std::sync::Arc;

use sd_core::envelope::decode_data;
use sd_core::ports::{resource_path, ApiRequest, StorePort, TransportPort};
use sd_core::state::{SpiderMutation, SpiderState};
use sd_core::{SpiderId, SpiderStats};
use tracing::info;

use crate::error::ProjectorResult;

/// Use case for refreshing a spider's statistics.
///
/// The combined payload republishes the overview and the daily series.
/// `status_stats` and `node_stats` are not touched.
pub struct RefreshSpiderStats {
    transport: Arc<dyn TransportPort>,
    store: Arc<dyn StorePort<SpiderState>>,
}

impl RefreshSpiderStats {
    pub fn from_ports(
        transport: Arc<dyn TransportPort>,
        store: Arc<dyn StorePort<SpiderState>>,
    ) -> Self {
        Self { transport, store }
    }

    #[tracing::instrument(
        name = "usecase.refresh_spider_stats.execute",
        skip(self),
        fields(spider_id = %id)
    )]
    pub async fn execute(&self, id: &SpiderId) -> ProjectorResult<()> {
        let body = self
            .transport
            .send(ApiRequest::get(resource_path(&["spiders", id.as_str(), "stats"])))
            .await?;
        let stats: SpiderStats = decode_data(body)?;

        info!(
            task_count = stats.overview.task_count,
            days = stats.daily.len(),
            "Refreshed spider stats"
        );
        self.store.dispatch(SpiderMutation::SetStats {
            overview: stats.overview,
            daily: stats.daily,
        });
        Ok(())
    }
}
