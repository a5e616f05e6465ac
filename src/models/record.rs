//! Catalog records and pages.

use serde::{Deserialize, Serialize};

/// One catalog entry as returned by the portal search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    /// Globally unique identifier, also used to address the detail page.
    pub guid: String,
    /// Display name.
    pub name: String,
    /// Author label (often empty or null).
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_seconds_formatted: Option<String>,
    #[serde(default)]
    pub created_utc: Option<String>,
    #[serde(default)]
    pub media_type_name: Option<String>,
}

impl Record {
    /// Author label, or `None` when the portal left it blank.
    pub fn author_label(&self) -> Option<&str> {
        self.author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

/// Parameters of a single page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub index: u32,
    /// Number of records per page.
    pub size: u32,
}

impl PageRequest {
    pub fn new(index: u32, size: u32) -> Self {
        Self { index, size }
    }

    /// 1-based page number as the portal expects it.
    pub fn portal_page(&self) -> u32 {
        self.index + 1
    }
}

/// A decoded page of catalog records.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    /// Records in server order.
    pub items: Vec<Record>,
    /// 1-based number of this page.
    pub current_page: u32,
    /// Total number of pages for the requested page size.
    pub total_pages: u32,
    /// Total number of records in the catalog.
    pub total_items: u64,
    /// Page size the server actually applied.
    pub items_per_page: u32,
}

impl PageResult {
    /// Whether this is the final page of the catalog.
    pub fn is_last(&self) -> bool {
        self.current_page >= self.total_pages
    }
}
