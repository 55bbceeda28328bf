mod loader;

pub use loader::{default_config_path, load_config, write_default_config, ConfigLoadError};
