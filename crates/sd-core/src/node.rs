use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::NodeId;

/// A worker node a spider can be deployed to or run on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "_id", default)]
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// `online` or `offline`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    pub fn is_online(&self) -> bool {
        self.status.as_deref() == Some("online")
    }
}
