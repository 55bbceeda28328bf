//! spiderdeck Application Orchestration Layer
//!
//! This crate contains the spider projector: one use case per API
//! operation, the [`SpiderProjector`](projector::SpiderProjector) facade
//! that binds them to a cancellable context, and the
//! [`SpiderWorkbench`](workbench::SpiderWorkbench) that routes results into
//! sibling stores.

pub mod deps;
pub mod error;
pub mod projector;
pub mod usecases;
pub mod workbench;

pub use deps::SpiderDeps;
pub use error::{ProjectorError, ProjectorResult};
pub use projector::SpiderProjector;
pub use workbench::SpiderWorkbench;
