use std::sync::Arc;

use sd_core::envelope::decode_data;
use sd_core::ports::{resource_path, ApiRequest, StorePort, TransportPort};
use sd_core::state::{SpiderMutation, SpiderState};
use sd_core::{Spider, SpiderId};
use tracing::info;

use crate::error::ProjectorResult;

/// Use case for loading one spider as the active item detail.
pub struct LoadSpider {
    transport: Arc<dyn TransportPort>,
    store: Arc<dyn StorePort<SpiderState>>,
}

impl LoadSpider {
    pub fn from_ports(
        transport: Arc<dyn TransportPort>,
        store: Arc<dyn StorePort<SpiderState>>,
    ) -> Self {
        Self { transport, store }
    }

    /// Replaces `spider_form` with the record for `id`.
    ///
    /// The record replaces the previous detail wholesale. If the request
    /// fails, the previously loaded detail stays active.
    #[tracing::instrument(
        name = "usecase.load_spider.execute",
        skip(self),
        fields(spider_id = %id)
    )]
    pub async fn execute(&self, id: &SpiderId) -> ProjectorResult<()> {
        let body = self
            .transport
            .send(ApiRequest::get(resource_path(&["spiders", id.as_str()])))
            .await?;
        let spider: Spider = decode_data(body)?;

        info!(spider_id = %id, name = %spider.name, "Loaded spider detail");
        self.store.dispatch(SpiderMutation::SetSpiderForm(spider));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_failed_load_keeps_first_detail() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.path == "/spiders/first")
            .times(1)
            .returning(|_| Ok(ok(json!({ "_id": "first", "name": "first", "cmd": "python main.py" }))));
        transport
            .expect_send()
            .withf(|req| req.path == "/spiders/second")
            .times(1)
            .returning(|_| Err(server_error()));

        let store = spider_store();
        let use_case = LoadSpider::from_ports(Arc::new(transport), as_store(&store));

        use_case.execute(&SpiderId::from("first")).await.unwrap();
        let after_first = store.snapshot().spider_form;

        assert!(use_case.execute(&SpiderId::from("second")).await.is_err());

        let form = store.snapshot().spider_form;
        assert_eq!(form, after_first);
        let form = form.expect("first detail should still be active");
        assert_eq!(form.id.as_str(), "first");
        assert_eq!(form.cmd.as_deref(), Some("python main.py"));
    }

    #[tokio::test]
    async fn test_load_replaces_detail_wholesale() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.path == "/spiders/a")
            .returning(|_| Ok(ok(json!({ "_id": "a", "name": "a", "col": "results_a" }))));
        transport
            .expect_send()
            .withf(|req| req.path == "/spiders/b")
            .returning(|_| Ok(ok(json!({ "_id": "b", "name": "b" }))));

        let store = spider_store();
        let use_case = LoadSpider::from_ports(Arc::new(transport), as_store(&store));

        use_case.execute(&SpiderId::from("a")).await.unwrap();
        use_case.execute(&SpiderId::from("b")).await.unwrap();

        let form = store.snapshot().spider_form.unwrap();
        assert_eq!(form.id.as_str(), "b");
        assert_eq!(form.col, None);
    }

    #[tokio::test]
    async fn test_missing_data_is_a_failure() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(ok(serde_json::Value::Null)));

        let store = spider_store();
        let use_case = LoadSpider::from_ports(Arc::new(transport), as_store(&store));

        assert!(use_case.execute(&SpiderId::from("gone")).await.is_err());
        assert!(store.snapshot().spider_form.is_none());
    }
}
