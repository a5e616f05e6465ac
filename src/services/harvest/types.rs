//! Harvest service types and events.

use std::path::PathBuf;

use thiserror::Error;

use crate::scrapers::ScrapeError;
use crate::services::download::DownloadError;

/// Events emitted while a harvest runs.
#[derive(Debug, Clone)]
pub enum HarvestEvent {
    /// A record was taken from the catalog and is being resolved.
    Resolving { guid: String, name: String },
    /// The record's media was stored.
    Downloaded { guid: String, destination: PathBuf },
    /// The record was skipped after a resolution or download failure.
    Failed {
        guid: String,
        name: String,
        error: String,
    },
}

/// Options for one harvest run.
#[derive(Debug, Clone)]
pub struct HarvestOptions {
    /// Directory the media files are written to.
    pub destination: PathBuf,
    /// Records requested per catalog page.
    pub page_size: u32,
    /// Stop after this many records.
    pub limit: Option<usize>,
}

/// Outcome of a harvest run.
#[derive(Debug, Default)]
pub struct HarvestSummary {
    /// Records taken from the catalog.
    pub seen: usize,
    pub downloaded: usize,
    pub failed: usize,
    /// Set when enumeration itself failed and the run stopped early.
    pub catalog_error: Option<ScrapeError>,
}

impl HarvestSummary {
    pub fn is_complete(&self) -> bool {
        self.catalog_error.is_none()
    }
}

/// Why a single record was skipped.
#[derive(Debug, Error)]
pub(crate) enum RecordError {
    #[error(transparent)]
    Scrape(#[from] ScrapeError),
    #[error(transparent)]
    Download(#[from] DownloadError),
}
