//! Port interfaces for the application layer
//!
//! Ports define the contract between the projector's use cases and their
//! infrastructure: how requests reach the server and where projected state
//! lives. Use cases only ever hold `Arc<dyn ...Port>`.

pub mod errors;
pub mod store;
pub mod transport;

#[cfg(any(test, feature = "test-utils"))]
pub mod tests;

pub use errors::TransportError;
pub use store::StorePort;
pub use transport::{resource_path, ApiRequest, Method, TransportPort};
