//! Process bootstrap: configuration, logging and dependency wiring.

pub mod config;
pub mod logging;
pub mod wiring;

pub use config::{load_app_config, log_config_source, resolve_config_path};
pub use logging::init_tracing_subscriber;
pub use wiring::wire_dependencies;
