//! Service layer: the harvest pipeline and its download adapters.
//!
//! Services report progress through events and leave rendering to the CLI.

pub mod download;
pub mod harvest;

pub use download::{DownloadError, Downloader, FfmpegDownloader};
pub use harvest::{HarvestEvent, HarvestOptions, HarvestSummary, Harvester};
