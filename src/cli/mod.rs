//! Command-line surface of spiderdeck.

pub mod args;
pub mod commands;
pub mod edit;

pub use args::{Cli, Command, ConfigCommand};
pub use commands::{execute, init_config};
