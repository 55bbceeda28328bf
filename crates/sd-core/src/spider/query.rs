use serde::{Deserialize, Serialize};

/// Parameters for one page of `GET /spiders`.
///
/// An empty query (the `Default`) issues the request without any query
/// string, which is what the post-mutation refresh uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiderListQuery {
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
    pub keyword: Option<String>,
    pub spider_type: Option<String>,
    pub site: Option<String>,
}

impl SpiderListQuery {
    pub fn page(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num: Some(page_num),
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_type(mut self, spider_type: impl Into<String>) -> Self {
        self.spider_type = Some(spider_type.into());
        self
    }

    /// Folds the projector's filter state into this query.
    ///
    /// An empty site filter leaves the query untouched.
    pub fn with_filter(mut self, filter: &SpiderFilter) -> Self {
        if !filter.site.is_empty() {
            self.site = Some(filter.site.clone());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }

    /// Query string pairs using the server's parameter names.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page_num) = self.page_num {
            pairs.push(("pageNum".to_string(), page_num.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pageSize".to_string(), page_size.to_string()));
        }
        if let Some(keyword) = &self.keyword {
            pairs.push(("keyword".to_string(), keyword.clone()));
        }
        if let Some(spider_type) = &self.spider_type {
            pairs.push(("type".to_string(), spider_type.clone()));
        }
        if let Some(site) = &self.site {
            pairs.push(("site".to_string(), site.clone()));
        }
        pairs
    }
}

/// Scalar filters owned by the projector; never written by responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiderFilter {
    pub site: String,
}
