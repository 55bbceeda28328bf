//! End-to-end flows through the projector against a scripted transport.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sd_app::{ProjectorError, SpiderDeps, SpiderWorkbench};
use sd_core::ports::{ApiRequest, Method, StorePort, TransportError, TransportPort};
use sd_core::state::{SpiderState, TaskState};
use sd_core::{ImportForm, NodeId, SpiderId, SpiderListQuery};
use sd_infra::store::WatchStore;
use serde_json::{json, Value};

/// Answers requests in order from a script and records what was sent.
#[derive(Default)]
struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<Value, TransportError>>>,
    sent: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    fn with_replies(replies: Vec<Result<Value, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            sent: Mutex::new(Vec::new()),
        })
    }

    fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransportPort for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        self.sent.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("script exhausted".to_string())))
    }
}

struct Fixture {
    transport: Arc<ScriptedTransport>,
    spiders: Arc<WatchStore<SpiderState>>,
    tasks: Arc<WatchStore<TaskState>>,
    bench: SpiderWorkbench,
}

fn fixture(replies: Vec<Result<Value, TransportError>>) -> Fixture {
    let transport = ScriptedTransport::with_replies(replies);
    let spiders = Arc::new(WatchStore::<SpiderState>::new());
    let tasks = Arc::new(WatchStore::<TaskState>::new());
    let bench = SpiderWorkbench::new(SpiderDeps {
        transport: transport.clone(),
        spider_store: spiders.clone(),
        task_store: tasks.clone(),
    });
    Fixture {
        transport,
        spiders,
        tasks,
        bench,
    }
}

fn ok(data: Value) -> Result<Value, TransportError> {
    Ok(json!({ "status": "ok", "message": "success", "data": data }))
}

fn page(ids: &[&str], total: u64) -> Result<Value, TransportError> {
    let list: Vec<Value> = ids.iter().map(|id| json!({ "_id": id, "name": id })).collect();
    ok(json!({ "list": list, "total": total }))
}

fn listed_ids(store: &WatchStore<SpiderState>) -> Vec<String> {
    store
        .snapshot()
        .spider_list
        .iter()
        .map(|s| s.id.to_string())
        .collect()
}

#[tokio::test]
async fn test_first_page_keeps_server_total() {
    let fx = fixture(vec![page(&["a", "b"], 5)]);

    fx.bench
        .projector()
        .list(SpiderListQuery::page(1, 2))
        .await
        .unwrap();

    assert_eq!(listed_ids(&fx.spiders), vec!["a", "b"]);
    assert_eq!(fx.spiders.snapshot().spider_total, 5);
}

#[tokio::test]
async fn test_edit_and_save_then_reload_once() {
    let fx = fixture(vec![
        ok(json!({ "_id": "s1", "name": "douban", "cmd": "scrapy crawl douban" })),
        ok(Value::Null),
        page(&["s1"], 1),
    ]);
    let projector = fx.bench.projector();
    let id = SpiderId::from("s1");

    projector.load(&id).await.unwrap();
    let mut form = fx.spiders.snapshot().spider_form.unwrap();
    form.cmd = Some("scrapy crawl douban -L INFO".to_string());
    projector.set_spider_form(form);
    projector.save().await.unwrap();

    let sent = fx.transport.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[1].method, Method::Post);
    assert_eq!(sent[1].path, "/spiders/s1");
    assert_eq!(
        sent[1].body.as_ref().unwrap()["cmd"],
        "scrapy crawl douban -L INFO"
    );
    assert_eq!(sent[2].method, Method::Get);
    assert_eq!(sent[2].path, "/spiders");
    assert!(sent[2].query.is_empty());
}

#[tokio::test]
async fn test_delete_then_refresh_drops_the_item() {
    let fx = fixture(vec![
        page(&["a", "b"], 2),
        ok(Value::Null),
        page(&["b"], 1),
    ]);
    let projector = fx.bench.projector();

    projector.list(SpiderListQuery::default()).await.unwrap();
    projector.delete(&SpiderId::from("a")).await.unwrap();

    assert_eq!(listed_ids(&fx.spiders), vec!["b"]);
    assert_eq!(fx.spiders.snapshot().spider_total, 1);
}

#[tokio::test]
async fn test_failed_load_keeps_previous_detail() {
    let fx = fixture(vec![
        ok(json!({ "_id": "a", "name": "first" })),
        Err(TransportError::Status {
            status: 500,
            message: "not found".to_string(),
        }),
    ]);
    let projector = fx.bench.projector();

    projector.load(&SpiderId::from("a")).await.unwrap();
    let err = projector.load(&SpiderId::from("b")).await.unwrap_err();

    assert!(matches!(err, ProjectorError::Transport(TransportError::Status { status: 500, .. })));
    assert_eq!(
        fx.spiders.snapshot().spider_form.map(|s| s.name),
        Some("first".to_string())
    );
}

#[tokio::test]
async fn test_run_then_refresh_tasks_newest_first() {
    let fx = fixture(vec![
        ok(Value::Null),
        ok(json!([
            { "_id": "t1", "create_ts": 2 },
            { "_id": "t2", "create_ts": 5 },
            { "_id": "t3", "create_ts": 2 }
        ])),
    ]);
    let id = SpiderId::from("s1");

    fx.bench
        .projector()
        .enqueue(&id, &NodeId::from("n1"), "-a page=1")
        .await
        .unwrap();
    fx.bench.refresh_tasks(&id).await.unwrap();

    let sent = fx.transport.sent();
    assert_eq!(sent[0].method, Method::Put);
    assert_eq!(
        sent[0].body,
        Some(json!({ "spider_id": "s1", "node_id": "n1", "param": "-a page=1" }))
    );

    let order: Vec<String> = fx
        .tasks
        .snapshot()
        .task_list
        .iter()
        .map(|t| t.id.to_string())
        .collect();
    assert_eq!(order, vec!["t2", "t1", "t3"]);
}

#[tokio::test]
async fn test_import_uses_draft_and_does_not_reload() {
    let fx = fixture(vec![ok(json!({ "imported": true }))]);
    let projector = fx.bench.projector();

    projector.set_import_form(ImportForm::github("https://github.com/crawlab-team/examples"));
    let result = projector.import_from_external_source().await.unwrap();

    let sent = fx.transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].path, "/spiders/import/github");
    assert_eq!(
        sent[0].body,
        Some(json!({ "url": "https://github.com/crawlab-team/examples" }))
    );
    assert_eq!(result["data"]["imported"], true);
}

#[tokio::test]
async fn test_error_envelope_on_success_status_is_rejected() {
    let fx = fixture(vec![Ok(json!({
        "status": "error",
        "message": "failure",
        "error": "spider not found"
    }))]);

    let err = fx
        .bench
        .projector()
        .refresh_stats(&SpiderId::from("x"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProjectorError::Transport(TransportError::Rejected { .. })
    ));
    assert_eq!(fx.spiders.snapshot(), SpiderState::default());
}

#[tokio::test]
async fn test_teardown_stops_all_traffic() {
    let fx = fixture(vec![page(&["a"], 1)]);

    fx.bench.teardown();
    let err = fx
        .bench
        .projector()
        .list(SpiderListQuery::default())
        .await
        .unwrap_err();

    assert_eq!(err, ProjectorError::Cancelled);
    assert!(fx.transport.sent().is_empty());
}
