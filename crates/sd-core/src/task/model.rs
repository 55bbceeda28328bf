use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::timestamp::Timestamp;
use crate::ids::{NodeId, SpiderId, TaskId};

/// One run of a spider, as listed by `GET /spiders/{id}/tasks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id", default)]
    pub id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spider_id: Option<SpiderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_ts: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `PUT /tasks`: run one spider on one node with one parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlRequest {
    pub spider_id: SpiderId,
    pub node_id: NodeId,
    pub param: String,
}

/// Orders tasks newest first by `create_ts`.
///
/// The sort is stable: tasks with equal timestamps keep the order the
/// server returned them in. Tasks without a timestamp go last.
pub fn sort_by_create_ts_desc(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(|a, b| match (&a.create_ts, &b.create_ts) {
        (Some(a), Some(b)) => b.compare(a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    tasks
}
