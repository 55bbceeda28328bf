use std::sync::Arc;

use sd_core::envelope::decode_data_or_default;
use sd_core::ports::{resource_path, ApiRequest, StorePort, TransportPort};
use sd_core::state::{SpiderMutation, SpiderState};
use sd_core::{SpiderFile, SpiderId};
use tracing::debug;

use crate::error::ProjectorResult;

/// Use case for listing a directory of a spider's source tree.
///
/// The listing and the path it belongs to replace `dir_entries` and
/// `dir_path`. An empty directory comes back as `null` and projects as an
/// empty listing.
pub struct BrowseSpiderDir {
    transport: Arc<dyn TransportPort>,
    store: Arc<dyn StorePort<SpiderState>>,
}

impl BrowseSpiderDir {
    pub fn from_ports(
        transport: Arc<dyn TransportPort>,
        store: Arc<dyn StorePort<SpiderState>>,
    ) -> Self {
        Self { transport, store }
    }

    #[tracing::instrument(
        name = "usecase.browse_spider_dir.execute",
        skip(self),
        fields(spider_id = %id)
    )]
    pub async fn execute(&self, id: &SpiderId, path: &str) -> ProjectorResult<()> {
        let request = ApiRequest::get(resource_path(&["spiders", id.as_str(), "dir"]))
            .with_query(vec![("path".to_string(), path.to_string())]);
        let body = self.transport.send(request).await?;
        let entries: Vec<SpiderFile> = decode_data_or_default(body)?;

        debug!(entries = entries.len(), path, "Listed spider directory");
        self.store.dispatch(SpiderMutation::SetDir {
            path: path.to_string(),
            entries,
        });
        Ok(())
    }
}
