//! # sd-core
//!
//! Core domain models, state projections and ports for spiderdeck.
//!
//! This crate contains pure data and reducer logic without any
//! infrastructure dependencies. Network access and state storage are
//! reached through the traits in [`ports`].

// Public module exports
pub mod config;
pub mod envelope;
pub mod ids;
pub mod node;
pub mod ports;
pub mod spider;
pub mod state;
pub mod stats;
pub mod task;

// Re-export commonly used types at the crate root
pub use config::{ApiConfig, AppConfig, LogConfig};
pub use ids::{NodeId, SpiderId, TaskId};
pub use node::Node;
pub use spider::{
    ImportForm, ImportSource, Spider, SpiderFile, SpiderFilter, SpiderListQuery, SpiderTypeCount,
};
pub use state::{Reducer, SpiderMutation, SpiderState, TaskMutation, TaskState};
pub use stats::{DailyStat, NodeStat, OverviewStats, SpiderStats, StatusStat};
pub use task::{sort_by_create_ts_desc, CrawlRequest, Task, Timestamp};
