//! Detail page resolution.

use scraper::{Html, Selector};
use tracing::debug;

use super::PortalScraper;
use crate::models::{Credential, Record, ResolvedMedia};
use crate::scrapers::retry::{with_retry, RetryPolicy};
use crate::scrapers::ScrapeError;
use crate::utils::unescape_amp;

/// Media source element inside the player markup.
const MEDIA_SOURCE_SELECTOR: &str = "video > source";

/// Extract the media URL from a detail page.
///
/// Takes the first `source` child of a `video` element that has a non-empty
/// `src`, with leftover `&amp;` sequences normalized to `&`.
pub fn extract_media_url(html: &str, guid: &str) -> Result<String, ScrapeError> {
    let selector = Selector::parse(MEDIA_SOURCE_SELECTOR)
        .map_err(|e| ScrapeError::Decode(format!("invalid selector: {:?}", e)))?;
    let document = Html::parse_document(html);

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("src"))
        .find(|src| !src.is_empty())
        .map(unescape_amp)
        .ok_or_else(|| ScrapeError::NotFound {
            guid: guid.to_string(),
        })
}

impl PortalScraper {
    /// Resolve a record's media URL under the default retry policy.
    pub async fn resolve_url(
        &self,
        guid: &str,
        credential: &Credential,
    ) -> Result<String, ScrapeError> {
        self.resolve_url_with_policy(guid, credential, &self.retry)
            .await
    }

    /// Resolve a record's media URL under an explicit retry policy.
    ///
    /// Every attempt downloads the page again.
    pub async fn resolve_url_with_policy(
        &self,
        guid: &str,
        credential: &Credential,
        policy: &RetryPolicy,
    ) -> Result<String, ScrapeError> {
        with_retry(policy, || self.resolve_url_once(guid, credential)).await
    }

    /// Resolve a record into everything the download step needs.
    pub async fn resolve(
        &self,
        record: &Record,
        credential: &Credential,
    ) -> Result<ResolvedMedia, ScrapeError> {
        let url = self.resolve_url(&record.guid, credential).await?;
        Ok(ResolvedMedia::from_record(record, url))
    }

    async fn resolve_url_once(
        &self,
        guid: &str,
        credential: &Credential,
    ) -> Result<String, ScrapeError> {
        let url = self.config.detail_url(guid);
        debug!("Fetching detail page for {}: {}", guid, url);

        let response = self.client.get(&url, credential).await?;
        let html = response.text().await?;
        extract_media_url(&html, guid)
    }
}
