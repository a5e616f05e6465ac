//! Resolve a single record.

use anyhow::Context;

use crate::cli::helpers::{build_scraper, require_credential};
use crate::config::Settings;

/// Print the media URL behind one record guid.
pub async fn cmd_resolve(settings: &Settings, cookie: Option<&str>, guid: &str) -> anyhow::Result<()> {
    let credential = require_credential(cookie)?;
    let scraper = build_scraper(settings)?;

    let url = scraper
        .resolve_url(guid, &credential)
        .await
        .with_context(|| format!("Failed to resolve {}", guid))?;

    println!("{}", url);
    Ok(())
}
