//! Harvest service.
//!
//! Walks the catalog in server order and, for every record, resolves the
//! media URL and hands it to a [`Downloader`]. One record is in flight at a
//! time. Per-record failures are logged and counted; only a failing catalog
//! page ends the run early.

mod types;

use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::models::{Credential, Record};
use crate::scrapers::PortalScraper;
use crate::services::download::Downloader;

pub use types::{HarvestEvent, HarvestOptions, HarvestSummary};
use types::RecordError;

/// Drives catalog enumeration, resolution and download.
pub struct Harvester<D> {
    scraper: PortalScraper,
    downloader: D,
    events: Option<mpsc::Sender<HarvestEvent>>,
}

impl<D: Downloader> Harvester<D> {
    pub fn new(scraper: PortalScraper, downloader: D) -> Self {
        Self {
            scraper,
            downloader,
            events: None,
        }
    }

    /// Send progress events to `tx`. A closed receiver is ignored.
    pub fn with_events(mut self, tx: mpsc::Sender<HarvestEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    /// Run one harvest to the end of the catalog (or the limit).
    pub async fn run(&self, credential: &Credential, options: &HarvestOptions) -> HarvestSummary {
        let mut summary = HarvestSummary::default();
        let mut records = std::pin::pin!(self.scraper.enumerate(options.page_size, credential));

        loop {
            if options.limit.is_some_and(|limit| summary.seen >= limit) {
                info!("Stopping after {} records (limit reached)", summary.seen);
                break;
            }

            let record = match records.next().await {
                Some(Ok(record)) => record,
                Some(Err(e)) => {
                    error!("Catalog enumeration failed: {}", e);
                    summary.catalog_error = Some(e);
                    break;
                }
                None => break,
            };

            summary.seen += 1;
            self.emit(HarvestEvent::Resolving {
                guid: record.guid.clone(),
                name: record.name.clone(),
            })
            .await;

            match self.process(&record, credential, &options.destination).await {
                Ok(destination) => {
                    summary.downloaded += 1;
                    self.emit(HarvestEvent::Downloaded {
                        guid: record.guid.clone(),
                        destination,
                    })
                    .await;
                }
                Err(e) => {
                    warn!(
                        "Could not fetch video {} ({}): {}",
                        record.name, record.guid, e
                    );
                    summary.failed += 1;
                    self.emit(HarvestEvent::Failed {
                        guid: record.guid.clone(),
                        name: record.name.clone(),
                        error: e.to_string(),
                    })
                    .await;
                }
            }
        }

        info!(
            "Harvest finished: {} seen, {} downloaded, {} failed",
            summary.seen, summary.downloaded, summary.failed
        );
        summary
    }

    async fn process(
        &self,
        record: &Record,
        credential: &Credential,
        directory: &Path,
    ) -> Result<PathBuf, RecordError> {
        let media = self.scraper.resolve(record, credential).await?;
        let destination = directory.join(media.file_name());
        self.downloader
            .download(&media.media_url, &destination)
            .await?;
        Ok(destination)
    }

    async fn emit(&self, event: HarvestEvent) {
        if let Some(ref tx) = self.events {
            let _ = tx.send(event).await;
        }
    }
}
