//! # Projector Dependencies
//!
//! Parameter grouping for projector construction. Not a builder: every
//! dependency is required and nothing has a default.

use std::sync::Arc;

use sd_core::ports::{StorePort, TransportPort};
use sd_core::state::{SpiderState, TaskState};

pub struct SpiderDeps {
    pub transport: Arc<dyn TransportPort>,
    pub spider_store: Arc<dyn StorePort<SpiderState>>,
    pub task_store: Arc<dyn StorePort<TaskState>>,
}
