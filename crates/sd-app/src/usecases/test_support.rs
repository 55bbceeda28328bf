//! Shared fixtures for use case tests.

use std::sync::Arc;

use sd_core::ports::{StorePort, TransportError};
use sd_core::state::SpiderState;
use sd_core::{Spider, SpiderId};
use sd_infra::store::WatchStore;
use serde_json::{json, Value};

pub use sd_core::ports::tests::mock_ports::MockTransport;

pub fn spider_store() -> Arc<WatchStore<SpiderState>> {
    Arc::new(WatchStore::new())
}

pub fn as_store(store: &Arc<WatchStore<SpiderState>>) -> Arc<dyn StorePort<SpiderState>> {
    store.clone()
}

pub fn ok(data: Value) -> Value {
    json!({ "status": "ok", "message": "success", "data": data })
}

pub fn ok_empty() -> Value {
    json!({ "status": "ok", "message": "success" })
}

pub fn server_error() -> TransportError {
    TransportError::Status {
        status: 500,
        message: "not found".to_string(),
    }
}

pub fn spider(id: &str) -> Spider {
    Spider {
        id: SpiderId::from(id),
        name: id.to_string(),
        ..Default::default()
    }
}

pub fn page(ids: &[&str], total: u64) -> Value {
    let list: Vec<Value> = ids.iter().map(|id| json!({ "_id": id, "name": id })).collect();
    ok(json!({ "list": list, "total": total }))
}
