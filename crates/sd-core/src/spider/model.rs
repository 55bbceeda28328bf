use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::SpiderId;

/// A spider record as served by `GET /spiders` and `GET /spiders/{id}`.
///
/// The list endpoint and the detail endpoint return the same shape; the
/// list simply holds a page of them. Fields the console reads are typed,
/// everything else the server sends is kept in `extra` so that a save
/// posts back the full body that was loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spider {
    #[serde(rename = "_id", default)]
    pub id: SpiderId,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// `customized` or `configurable`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub spider_type: Option<String>,

    /// Result collection name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmd: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Spider {
    /// Name shown to users: `display_name` when set, otherwise `name`.
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(display) if !display.is_empty() => display,
            _ => &self.name,
        }
    }
}
