//! Projector use cases, one per API operation.
//!
//! Mutating operations reconcile through a full reload:
//!
//! SaveSpider / DeleteSpider
//!         ↓ (success only)
//! ListSpiders(no params)   → spider_list, spider_total
//!
//! Everything else is a single request whose decoded payload either
//! replaces one slice of [`SpiderState`](sd_core::state::SpiderState) or is
//! handed back to the caller untouched.

pub mod browse_spider_dir;
pub mod delete_spider;
pub mod enqueue_crawl;
pub mod extract_fields;
pub mod import_spider;
pub mod list_spider_tasks;
pub mod list_spider_types;
pub mod list_spiders;
pub mod load_spider;
pub mod preview_crawl;
pub mod publish_spider;
pub mod refresh_spider_stats;
pub mod save_spider;
pub mod spider_files;

#[cfg(test)]
pub(crate) mod test_support;

pub use browse_spider_dir::BrowseSpiderDir;
pub use delete_spider::DeleteSpider;
pub use enqueue_crawl::EnqueueCrawl;
pub use extract_fields::ExtractFields;
pub use import_spider::ImportSpider;
pub use list_spider_tasks::ListSpiderTasks;
pub use list_spider_types::ListSpiderTypes;
pub use list_spiders::ListSpiders;
pub use load_spider::LoadSpider;
pub use preview_crawl::PreviewCrawl;
pub use publish_spider::PublishSpider;
pub use refresh_spider_stats::RefreshSpiderStats;
pub use save_spider::SaveSpider;
pub use spider_files::{ReadSpiderFile, WriteSpiderFile};
