//! mediaharvest - bulk downloader for an authenticated media portal.
//!
//! Walks the portal's paginated catalog, resolves each record's stream URL
//! from its detail page and stores it as an MP4 file through ffmpeg.

pub mod cli;
pub mod config;
pub mod models;
pub mod scrapers;
pub mod services;
pub mod utils;

pub use config::{ConfigError, Settings};
pub use models::{Credential, Record, ResolvedMedia};
pub use scrapers::{PortalConfig, PortalScraper, RetryPolicy, ScrapeError};
pub use services::{DownloadError, Downloader, FfmpegDownloader, HarvestSummary, Harvester};
