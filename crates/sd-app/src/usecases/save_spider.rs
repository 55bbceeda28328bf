use std::sync::Arc;

use sd_core::envelope::check_status;
use sd_core::ports::{resource_path, ApiRequest, StorePort, TransportPort};
use sd_core::state::SpiderState;
use sd_core::SpiderListQuery;
use tracing::info;

use super::list_spiders::ListSpiders;
use crate::error::{ProjectorError, ProjectorResult};

/// Use case for submitting the active spider detail as an update.
///
/// The body is the current `spider_form`, not an argument. On success the
/// whole collection is reloaded without parameters so that fields the
/// server derives on save show up in the list; nothing is patched locally.
pub struct SaveSpider {
    transport: Arc<dyn TransportPort>,
    store: Arc<dyn StorePort<SpiderState>>,
    list: ListSpiders,
}

impl SaveSpider {
    pub fn from_ports(
        transport: Arc<dyn TransportPort>,
        store: Arc<dyn StorePort<SpiderState>>,
    ) -> Self {
        let list = ListSpiders::from_ports(transport.clone(), store.clone());
        Self {
            transport,
            store,
            list,
        }
    }

    /// Saves the active detail, then reloads the list.
    ///
    /// # Errors
    ///
    /// - [`ProjectorError::NoActiveSpider`] when no detail with an id is
    ///   loaded; no request is issued.
    /// - Any transport failure of the update; the list is not reloaded.
    /// - Any transport failure of the reload, after the update succeeded.
    #[tracing::instrument(name = "usecase.save_spider.execute", skip(self))]
    pub async fn execute(&self) -> ProjectorResult<()> {
        let state = self.store.snapshot();
        let form = state.spider_form.as_ref();
        let id = state
            .active_spider_id()
            .ok_or(ProjectorError::NoActiveSpider)?;

        let request =
            ApiRequest::post(resource_path(&["spiders", id.as_str()])).with_json(&form)?;
        let body = self.transport.send(request).await?;
        check_status(&body)?;
        info!(spider_id = %id, "Saved spider, reloading list");

        self.list.execute(SpiderListQuery::default()).await
    }
}
