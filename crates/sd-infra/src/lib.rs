//! Infrastructure adapters for spiderdeck.
//!
//! - [`http`]: the reqwest-backed [`TransportPort`](sd_core::ports::TransportPort)
//! - [`store`]: watch-channel state containers implementing
//!   [`StorePort`](sd_core::ports::StorePort)
//! - [`config`]: layered configuration loading

pub mod config;
pub mod http;
pub mod store;
