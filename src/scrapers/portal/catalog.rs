//! Catalog page fetching.

use serde::Deserialize;
use tracing::debug;

use super::PortalScraper;
use crate::models::{Credential, PageRequest, PageResult, Record};
use crate::scrapers::retry::{with_retry, RetryPolicy};
use crate::scrapers::ScrapeError;

/// Sort field sent with every search; newest status change first.
const ORDER_BY: &str = "LastMediaStatusChangedUtc";

/// Search envelope returned by the portal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<SearchData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchData {
    current_page: u32,
    total_pages: u32,
    #[serde(default)]
    total_items: u64,
    #[serde(default)]
    items_per_page: u32,
    items: Vec<Record>,
}

/// Form fields for one catalog search: no query, no filters, newest first.
pub(crate) fn search_form(lang: &str, request: PageRequest) -> Vec<(&'static str, String)> {
    vec![
        ("Lang", lang.to_string()),
        ("Q", String::new()),
        ("MediaTypeId", "0".to_string()),
        ("MediaCriteriaValueIds", String::new()),
        ("MediaFolderId", "0".to_string()),
        ("MediaAccessLevelId", "0".to_string()),
        ("TagIds", String::new()),
        ("Page", request.portal_page().to_string()),
        ("PageSize", request.size.to_string()),
        ("OrderBy", ORDER_BY.to_string()),
        ("OrderByAsc", "false".to_string()),
    ]
}

/// Decode a search response body into a page.
pub(crate) fn decode_page(body: &str) -> Result<PageResult, ScrapeError> {
    let response: SearchResponse = serde_json::from_str(body)?;

    if !response.success {
        return Err(ScrapeError::Decode(format!(
            "portal reported failure: {}",
            response.message.as_deref().unwrap_or("no message")
        )));
    }

    let data = response
        .data
        .ok_or_else(|| ScrapeError::Decode("response has no Data payload".to_string()))?;

    Ok(PageResult {
        items: data.items,
        current_page: data.current_page,
        total_pages: data.total_pages,
        total_items: data.total_items,
        items_per_page: data.items_per_page,
    })
}

impl PortalScraper {
    /// Fetch one catalog page under the default retry policy.
    pub async fn fetch_page(
        &self,
        request: PageRequest,
        credential: &Credential,
    ) -> Result<PageResult, ScrapeError> {
        self.fetch_page_with_policy(request, credential, &self.retry)
            .await
    }

    /// Fetch one catalog page under an explicit retry policy.
    pub async fn fetch_page_with_policy(
        &self,
        request: PageRequest,
        credential: &Credential,
        policy: &RetryPolicy,
    ) -> Result<PageResult, ScrapeError> {
        with_retry(policy, || self.fetch_page_once(request, credential)).await
    }

    /// Single attempt: POST the search form and decode the body.
    ///
    /// The portal signals failure through the `Success` flag, so the body is
    /// decoded even when the HTTP status is not 2xx.
    async fn fetch_page_once(
        &self,
        request: PageRequest,
        credential: &Credential,
    ) -> Result<PageResult, ScrapeError> {
        let url = self.config.search_url();
        let form = search_form(&self.config.lang, request);

        debug!(
            "Fetching catalog page {} (size {}): {}",
            request.portal_page(),
            request.size,
            url
        );

        let response = self.client.post_form(&url, &form, credential).await?;
        if !response.is_success() {
            debug!(
                "Catalog request returned HTTP {} ({}), decoding body anyway",
                response.status,
                response.content_type().unwrap_or("unknown content type")
            );
        }

        let body = response.text().await?;
        decode_page(&body)
    }
}
