use serde::{Deserialize, Serialize};

/// One entry of a spider's source directory (`GET /spiders/{id}/dir`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiderFile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_dir: bool,
    #[serde(default)]
    pub size: i64,
    /// Path relative to the spider's source root.
    #[serde(default)]
    pub path: String,
}

/// Spider type with the number of spiders of that type (`GET /spider/types`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiderTypeCount {
    #[serde(rename = "_id", alias = "type", default)]
    pub spider_type: String,
    #[serde(default)]
    pub count: u64,
}
