use serde::{Deserialize, Serialize};

/// Where an imported spider is fetched from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportSource {
    #[default]
    Github,
}

impl ImportSource {
    /// API path the import is submitted to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ImportSource::Github => "/spiders/import/github",
        }
    }
}

/// Scratch record for a one-shot import request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportForm {
    pub url: String,
    #[serde(rename = "type", default)]
    pub source: ImportSource,
}

impl ImportForm {
    pub fn github(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            source: ImportSource::Github,
        }
    }
}
