//! Portal access: HTTP plumbing, retry policy and the catalog scraper.

pub mod config;
mod error;
mod http_client;
pub mod portal;
pub mod retry;

pub use config::PortalConfig;
pub use error::ScrapeError;
pub use http_client::{resolve_user_agent, HttpClient, HttpResponse, BROWSER_USER_AGENT, USER_AGENT};
pub use portal::{extract_media_url, PortalScraper};
pub use retry::{with_retry, RetryPolicy};
