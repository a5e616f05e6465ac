//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod harvest;
mod list;
mod resolve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "mediaharvest")]
#[command(about = "Download every video of an authenticated media portal")]
#[command(version)]
pub struct Cli {
    /// Config file path (default: mediaharvest.toml in the working directory, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Portal base URL (overrides config file)
    #[arg(long, global = true, env = "MEDIAHARVEST_BASE_URL")]
    base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate the catalog, resolve every record and download it
    Harvest {
        /// Session cookie copied from the browser
        #[arg(long, env = "MEDIAHARVEST_COOKIE", hide_env_values = true)]
        cookie: Option<String>,
        /// Directory to store the videos in
        #[arg(short, long, env = "MEDIAHARVEST_DIR")]
        dir: Option<String>,
        /// Records per catalog page (overrides config file)
        #[arg(long, env = "MEDIAHARVEST_PAGE_SIZE")]
        page_size: Option<u32>,
        /// Stop after this many records
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List catalog records without downloading anything
    List {
        /// Session cookie copied from the browser
        #[arg(long, env = "MEDIAHARVEST_COOKIE", hide_env_values = true)]
        cookie: Option<String>,
        /// Records per catalog page (overrides config file)
        #[arg(long, env = "MEDIAHARVEST_PAGE_SIZE")]
        page_size: Option<u32>,
        /// Stop after this many records
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the media URL of a single record
    Resolve {
        /// Session cookie copied from the browser
        #[arg(long, env = "MEDIAHARVEST_COOKIE", hide_env_values = true)]
        cookie: Option<String>,
        /// Record guid
        guid: String,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let page_size = match cli.command {
        Commands::Harvest { page_size, .. } | Commands::List { page_size, .. } => page_size,
        Commands::Resolve { .. } => None,
    };
    let options = LoadOptions {
        config_path: cli.config,
        page_size,
        base_url: cli.base_url,
    };
    let settings = load_settings_with_options(&options).await?;

    match cli.command {
        Commands::Harvest {
            cookie, dir, limit, ..
        } => harvest::cmd_harvest(&settings, cookie.as_deref(), dir.as_deref(), limit).await,
        Commands::List { cookie, limit, .. } => {
            list::cmd_list(&settings, cookie.as_deref(), limit).await
        }
        Commands::Resolve { cookie, guid } => {
            resolve::cmd_resolve(&settings, cookie.as_deref(), &guid).await
        }
    }
}
