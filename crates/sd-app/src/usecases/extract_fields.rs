use std::sync::Arc;

use sd_core::envelope::check_status;
use sd_core::ports::{resource_path, ApiRequest, TransportPort};
use sd_core::SpiderId;
use serde_json::Value;

use crate::error::ProjectorResult;

/// Use case for asking the server to extract a field schema from a
/// configurable spider's start page. The raw response goes to the caller.
pub struct ExtractFields {
    transport: Arc<dyn TransportPort>,
}

impl ExtractFields {
    pub fn from_ports(transport: Arc<dyn TransportPort>) -> Self {
        Self { transport }
    }

    #[tracing::instrument(
        name = "usecase.extract_fields.execute",
        skip(self),
        fields(spider_id = %id)
    )]
    pub async fn execute(&self, id: &SpiderId) -> ProjectorResult<Value> {
        let body = self
            .transport
            .send(ApiRequest::post(resource_path(&["spiders", id.as_str(), "extract_fields"])))
            .await?;
        check_status(&body)?;
        Ok(body)
    }
}
