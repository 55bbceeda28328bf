use std::sync::Arc;

use sd_core::envelope::check_status;
use sd_core::ports::{ApiRequest, StorePort, TransportPort};
use sd_core::state::SpiderState;
use serde_json::{json, Value};
use tracing::info;

use crate::error::ProjectorResult;

/// Use case for submitting the import draft.
///
/// Unlike save and delete this does not reload the collection; callers
/// that want the imported spider listed issue their own `list`.
pub struct ImportSpider {
    transport: Arc<dyn TransportPort>,
    store: Arc<dyn StorePort<SpiderState>>,
}

impl ImportSpider {
    pub fn from_ports(
        transport: Arc<dyn TransportPort>,
        store: Arc<dyn StorePort<SpiderState>>,
    ) -> Self {
        Self { transport, store }
    }

    #[tracing::instrument(name = "usecase.import_spider.execute", skip(self))]
    pub async fn execute(&self) -> ProjectorResult<Value> {
        let form = self.store.snapshot().import_form;
        let request = ApiRequest::post(form.source.endpoint()).with_json(&json!({ "url": form.url }))?;

        let body = self.transport.send(request).await?;
        check_status(&body)?;
        info!(url = %form.url, "Import submitted");
        Ok(body)
    }
}
