use serde::Serialize;
use serde_json::Value;

use super::Reducer;
use crate::ids::SpiderId;
use crate::node::Node;
use crate::spider::{ImportForm, Spider, SpiderFile, SpiderFilter, SpiderTypeCount};
use crate::stats::{DailyStat, NodeStat, OverviewStats, StatusStat};

/// Local projection of the spider collection and everything the spider
/// screens render.
///
/// All fields start empty and are replaced wholesale; nothing is merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpiderState {
    /// One page of the collection, in server order.
    pub spider_list: Vec<Spider>,
    /// Server-side total; may exceed `spider_list.len()`.
    pub spider_total: u64,
    /// The active item detail, also the draft submitted by a save.
    pub spider_form: Option<Spider>,
    /// Node chosen for deploys and runs.
    pub active_node: Option<Node>,
    pub import_form: ImportForm,
    pub overview_stats: OverviewStats,
    /// Not projected by any refresh yet.
    pub status_stats: Vec<StatusStat>,
    pub daily_stats: Vec<DailyStat>,
    /// Not projected by any refresh yet.
    pub node_stats: Vec<NodeStat>,
    pub filter: SpiderFilter,
    pub preview_crawl_data: Vec<Value>,
    pub dir_path: String,
    pub dir_entries: Vec<SpiderFile>,
    pub spider_types: Vec<SpiderTypeCount>,
}

impl SpiderState {
    /// Id of the active item detail, if one is loaded and carries an id.
    pub fn active_spider_id(&self) -> Option<&SpiderId> {
        self.spider_form
            .as_ref()
            .map(|spider| &spider.id)
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpiderMutation {
    /// Replace the page and its total together.
    SetSpiderPage { list: Vec<Spider>, total: u64 },
    SetSpiderForm(Spider),
    SetActiveNode(Option<Node>),
    SetImportForm(ImportForm),
    /// Replace the overview and time-series views; per-status and per-node
    /// views are left as they are.
    SetStats {
        overview: OverviewStats,
        daily: Vec<DailyStat>,
    },
    SetFilterSite(String),
    SetPreviewCrawlData(Vec<Value>),
    SetDir {
        path: String,
        entries: Vec<SpiderFile>,
    },
    SetSpiderTypes(Vec<SpiderTypeCount>),
}

impl SpiderMutation {
    pub fn kind(&self) -> &'static str {
        match self {
            SpiderMutation::SetSpiderPage { .. } => "set_spider_page",
            SpiderMutation::SetSpiderForm(_) => "set_spider_form",
            SpiderMutation::SetActiveNode(_) => "set_active_node",
            SpiderMutation::SetImportForm(_) => "set_import_form",
            SpiderMutation::SetStats { .. } => "set_stats",
            SpiderMutation::SetFilterSite(_) => "set_filter_site",
            SpiderMutation::SetPreviewCrawlData(_) => "set_preview_crawl_data",
            SpiderMutation::SetDir { .. } => "set_dir",
            SpiderMutation::SetSpiderTypes(_) => "set_spider_types",
        }
    }
}

impl Reducer for SpiderState {
    type Mutation = SpiderMutation;

    fn reduce(mut self, mutation: SpiderMutation) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(mutation = mutation.kind(), "reduce spider state");

        match mutation {
            SpiderMutation::SetSpiderPage { list, total } => {
                self.spider_list = list;
                self.spider_total = total;
            }
            SpiderMutation::SetSpiderForm(spider) => self.spider_form = Some(spider),
            SpiderMutation::SetActiveNode(node) => self.active_node = node,
            SpiderMutation::SetImportForm(form) => self.import_form = form,
            SpiderMutation::SetStats { overview, daily } => {
                self.overview_stats = overview;
                self.daily_stats = daily;
            }
            SpiderMutation::SetFilterSite(site) => self.filter.site = site,
            SpiderMutation::SetPreviewCrawlData(rows) => self.preview_crawl_data = rows,
            SpiderMutation::SetDir { path, entries } => {
                self.dir_path = path;
                self.dir_entries = entries;
            }
            SpiderMutation::SetSpiderTypes(types) => self.spider_types = types,
        }
        self
    }
}
