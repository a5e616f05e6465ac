//! Shared helper functions for CLI commands.

use std::path::PathBuf;

use crate::config::{ConfigError, Settings};
use crate::models::Credential;
use crate::scrapers::PortalScraper;

/// Turn the `--cookie` value into a credential.
pub fn require_credential(cookie: Option<&str>) -> Result<Credential, ConfigError> {
    Credential::new(cookie.unwrap_or_default())
}

/// Turn the `--dir` value into a path, expanding `~` and environment variables.
pub fn require_directory(dir: Option<&str>) -> Result<PathBuf, ConfigError> {
    let dir = dir
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or(ConfigError::MissingDirectory)?;
    let expanded = shellexpand::full(dir).map_err(|e| ConfigError::Invalid {
        key: "dir",
        reason: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Build the portal scraper described by the settings.
pub fn build_scraper(settings: &Settings) -> anyhow::Result<PortalScraper> {
    let scraper = PortalScraper::new(settings.portal.clone(), settings.retry)?;
    Ok(scraper)
}
