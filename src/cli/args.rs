use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sd_core::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "spiderdeck", version, about = "Manage spiders on a Crawlab-style API server")]
pub struct Cli {
    /// Config file (default: <config dir>/spiderdeck/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override `api.base_url`
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override `api.token`
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Folds command-line overrides into a loaded config.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(token) = &self.token {
            config.api.token = Some(token.clone());
        }
        if self.verbose {
            config.log.level = "debug".to_string();
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List one page of spiders
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Defaults to `api.page_size`
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long = "type")]
        spider_type: Option<String>,
        /// Only spiders of this site
        #[arg(long)]
        site: Option<String>,
    },
    /// Show one spider
    Show { id: String },
    /// Show a spider together with its tasks and stats
    Open { id: String },
    /// Edit fields of a spider and save it
    Save {
        id: String,
        /// KEY=VALUE; VALUE is parsed as JSON when it can be, else taken as text
        #[arg(long = "set", value_name = "KEY=VALUE", required = true)]
        assignments: Vec<String>,
    },
    /// Delete a spider
    Delete { id: String },
    /// Queue a crawl of a spider on a node
    Run {
        id: String,
        #[arg(long)]
        node: String,
        #[arg(long, default_value = "")]
        param: String,
    },
    /// List a spider's tasks, newest first
    Tasks { id: String },
    /// Show a spider's overview and daily stats
    Stats { id: String },
    /// Preview the rows a configurable spider would extract
    Preview { id: String },
    /// Ask the server to infer extraction fields
    Extract { id: String },
    /// Import a spider from a GitHub repository
    Import { url: String },
    /// List a directory of a spider's source tree
    Dir {
        id: String,
        #[arg(default_value = "")]
        path: String,
    },
    /// Print a source file of a spider
    Cat { id: String, path: String },
    /// Replace a source file of a spider with a local file
    Write {
        id: String,
        path: String,
        #[arg(long)]
        from: PathBuf,
    },
    /// Deploy a spider to all nodes
    Publish { id: String },
    /// Count spiders per type
    Types,
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write the built-in defaults to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}
