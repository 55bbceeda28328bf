use std::sync::Arc;

use sd_core::envelope::decode_data_or_default;
use sd_core::ports::{resource_path, ApiRequest, TransportPort};
use sd_core::{sort_by_create_ts_desc, SpiderId, Task};
use tracing::debug;

use crate::error::ProjectorResult;

/// Use case for fetching the tasks of one spider, newest first.
///
/// The result is returned, not stored: task lists belong to the task
/// namespace and are routed there by the caller.
pub struct ListSpiderTasks {
    transport: Arc<dyn TransportPort>,
}

impl ListSpiderTasks {
    pub fn from_ports(transport: Arc<dyn TransportPort>) -> Self {
        Self { transport }
    }

    /// Returns the spider's tasks sorted by `create_ts` descending.
    ///
    /// Equal timestamps keep server order. An empty or `null` payload is
    /// an empty list, not an error.
    #[tracing::instrument(
        name = "usecase.list_spider_tasks.execute",
        skip(self),
        fields(spider_id = %id)
    )]
    pub async fn execute(&self, id: &SpiderId) -> ProjectorResult<Vec<Task>> {
        let body = self
            .transport
            .send(ApiRequest::get(resource_path(&["spiders", id.as_str(), "tasks"])))
            .await?;
        let tasks: Vec<Task> = decode_data_or_default(body)?;
        debug!(count = tasks.len(), "Fetched spider tasks");
        Ok(sort_by_create_ts_desc(tasks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::*;
    use serde_json::{json, Value};

    async fn run(payload: Value) -> Vec<Task> {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.path == "/spiders/x/tasks")
            .times(1)
            .returning(move |_| Ok(payload.clone()));

        ListSpiderTasks::from_ports(Arc::new(transport))
            .execute(&SpiderId::from("x"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_sorted_descending_with_stable_ties() {
        let tasks = run(ok(json!([
            { "_id": "t1", "create_ts": 2 },
            { "_id": "t2", "create_ts": 5 },
            { "_id": "t3", "create_ts": 2 }
        ])))
        .await;

        let order: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec!["t2", "t1", "t3"]);
    }

    #[tokio::test]
    async fn test_null_payload_is_empty() {
        assert!(run(ok(Value::Null)).await.is_empty());
        assert!(run(ok_empty()).await.is_empty());
        assert!(run(ok(json!([]))).await.is_empty());
    }
}
