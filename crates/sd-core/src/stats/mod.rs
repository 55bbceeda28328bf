//! Per-spider statistics served by `GET /spiders/{id}/stats`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Aggregates over the spider's tasks of the last 30 days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewStats {
    pub task_count: u64,
    pub result_count: u64,
    pub success_count: u64,
    pub success_rate: f64,
    pub wait_duration: f64,
    pub runtime_duration: f64,
    pub avg_wait_duration: f64,
    pub avg_runtime_duration: f64,
}

/// One day of the time-series view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyStat {
    #[serde(rename = "_id", alias = "date", default)]
    pub date: String,
    #[serde(default)]
    pub task_count: u64,
    #[serde(default)]
    pub avg_runtime_duration: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Task count for one status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusStat {
    #[serde(rename = "_id", alias = "status", default)]
    pub status: String,
    #[serde(default)]
    pub count: u64,
}

/// Task count for one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeStat {
    #[serde(rename = "_id", alias = "node_id", default)]
    pub node_id: String,
    #[serde(default)]
    pub count: u64,
}

/// The combined `data` payload of the stats endpoint.
///
/// Only `overview` and `daily` are served today; the status and node
/// breakdowns are accepted when present but are not projected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpiderStats {
    #[serde(default)]
    pub overview: OverviewStats,
    #[serde(default, deserialize_with = "crate::envelope::null_as_default")]
    pub daily: Vec<DailyStat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_count_by_status: Option<Vec<StatusStat>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_count_by_node: Option<Vec<NodeStat>>,
}
