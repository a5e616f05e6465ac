//! Scraper for the media portal.
//!
//! The catalog is read through the portal's JSON search endpoint and every
//! record is resolved to a playable URL by scraping its HTML detail page.
//! Both network operations run under the scraper's [`RetryPolicy`] unless a
//! caller supplies its own.

use super::config::PortalConfig;
use super::retry::RetryPolicy;
use super::HttpClient;

mod catalog;
mod detail;
mod stream;

pub use detail::extract_media_url;

/// Portal scraper: page fetcher, catalog enumerator and detail resolver.
pub struct PortalScraper {
    pub(crate) config: PortalConfig,
    pub(crate) client: HttpClient,
    pub(crate) retry: RetryPolicy,
}

impl PortalScraper {
    /// Create a scraper with an HTTP client built from `config`.
    pub fn new(config: PortalConfig, retry: RetryPolicy) -> Result<Self, reqwest::Error> {
        let client = HttpClient::from_config(&config)?;
        Ok(Self::with_client(config, client, retry))
    }

    /// Create a scraper around an existing HTTP client.
    pub fn with_client(config: PortalConfig, client: HttpClient, retry: RetryPolicy) -> Self {
        Self {
            config,
            client,
            retry,
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }
}
