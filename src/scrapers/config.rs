//! Portal connection settings.
//!
//! These describe where the catalog lives and how politely to talk to it.
//! They are deserialized from the `[portal]` table of the config file.

use serde::{Deserialize, Serialize};

/// Default portal root.
pub const DEFAULT_BASE_URL: &str = "https://media.fhs.cuni.cz";
/// Default portal language segment.
pub const DEFAULT_LANG: &str = "cs";

/// Portal endpoint and HTTP client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Scheme and host of the portal, without a trailing path.
    pub base_url: String,
    /// Language segment used in every portal path (and the `Lang` form field).
    pub lang: String,
    /// User agent override; `"browser"` selects a desktop browser string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// Delay after every request in milliseconds.
    pub request_delay_ms: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lang: DEFAULT_LANG.to_string(),
            user_agent: None,
            request_timeout: 30,
            request_delay_ms: 0,
        }
    }
}

impl PortalConfig {
    fn root(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.lang)
    }

    /// Catalog search endpoint.
    pub fn search_url(&self) -> String {
        format!("{}/MediaAjax/Search", self.root())
    }

    /// Detail page of a single record.
    pub fn detail_url(&self, guid: &str) -> String {
        format!("{}/media/{}", self.root(), urlencoding::encode(guid))
    }
}
