//! Lazy catalog enumeration.

use futures::stream::{self, Stream, TryStreamExt};
use tracing::info;

use super::PortalScraper;
use crate::models::{Credential, PageRequest, Record};
use crate::scrapers::ScrapeError;

/// Page records plus the index of the next page, if any.
type PageStep = (Vec<Record>, Option<u32>);

impl PortalScraper {
    /// Stream every record of the catalog in server order.
    ///
    /// Pages are fetched on demand, starting from page zero each time this is
    /// called. The stream ends after the page whose `CurrentPage` reaches
    /// `TotalPages`. If a page fetch still fails after retrying, that error
    /// is yielded and the stream ends.
    pub fn enumerate<'a>(
        &'a self,
        page_size: u32,
        credential: &'a Credential,
    ) -> impl Stream<Item = Result<Record, ScrapeError>> + 'a {
        stream::try_unfold(Some(0u32), move |cursor| {
            self.next_page(cursor, page_size, credential)
        })
        .map_ok(|items| stream::iter(items.into_iter().map(Ok::<Record, ScrapeError>)))
        .try_flatten()
    }

    async fn next_page(
        &self,
        cursor: Option<u32>,
        page_size: u32,
        credential: &Credential,
    ) -> Result<Option<PageStep>, ScrapeError> {
        let Some(index) = cursor else {
            return Ok(None);
        };

        let page = self
            .fetch_page(PageRequest::new(index, page_size), credential)
            .await?;

        info!(
            "Catalog page {}/{}: {} items ({} total)",
            page.current_page,
            page.total_pages,
            page.items.len(),
            page.total_items
        );

        let next = if page.is_last() {
            None
        } else {
            Some(index + 1)
        };
        Ok(Some((page.items, next)))
    }
}
