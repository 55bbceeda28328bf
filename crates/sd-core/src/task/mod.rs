//! Task records and crawl requests.

mod model;
mod timestamp;

pub use model::{sort_by_create_ts_desc, CrawlRequest, Task};
pub use timestamp::Timestamp;
