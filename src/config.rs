//! Configuration for mediaharvest.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional TOML file, and command line flags (which clap also fills from
//! `MEDIAHARVEST_*` environment variables).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::scrapers::{PortalConfig, RetryPolicy};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "mediaharvest.toml";

/// Default number of records requested per catalog page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default external download tool.
pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// Problems that stop a run before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "No session cookie given.\n\
         Log in to the portal in your browser, open the developer console and run\n\
         \n    document.cookie\n\n\
         then pass the printed value with --cookie or MEDIAHARVEST_COOKIE."
    )]
    MissingCredential,

    #[error("No destination directory given. Pass --dir or set MEDIAHARVEST_DIR.")]
    MissingDirectory,

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0} not found in PATH. Install it or point [download] ffmpeg at the binary.")]
    ToolNotFound(String),
}

/// External download tool settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadSettings {
    /// ffmpeg binary name or path.
    pub ffmpeg: String,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            ffmpeg: DEFAULT_FFMPEG.to_string(),
        }
    }
}

/// Everything a run needs apart from the credential and destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Records requested per catalog page.
    pub page_size: u32,
    pub portal: PortalConfig,
    pub retry: RetryPolicy,
    pub download: DownloadSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            portal: PortalConfig::default(),
            retry: RetryPolicy::default(),
            download: DownloadSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from a TOML file.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let settings = Self::from_toml_str(&content, path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(settings)
    }

    /// Reject values that would make a run misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(invalid("page_size", "must be at least 1"));
        }
        if self.retry.max_attempts == 0 {
            return Err(invalid("retry.max_attempts", "must be at least 1"));
        }
        let multiplier = self.retry.backoff_multiplier;
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(invalid(
                "retry.backoff_multiplier",
                format!("must be a positive number, got {}", multiplier),
            ));
        }

        let base_url = Url::parse(&self.portal.base_url)
            .map_err(|e| invalid("portal.base_url", e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid(
                "portal.base_url",
                format!("unsupported scheme '{}'", base_url.scheme()),
            ));
        }

        if self.portal.lang.trim().is_empty() {
            return Err(invalid("portal.lang", "must not be empty"));
        }
        if self.download.ffmpeg.trim().is_empty() {
            return Err(invalid("download.ffmpeg", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(key: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.into(),
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Page size from the command line.
    pub page_size: Option<u32>,
    /// Portal base URL from the command line.
    pub base_url: Option<String>,
}

/// Load, override and validate settings.
///
/// An explicit config path must exist. Without one, `mediaharvest.toml` in
/// the working directory is used if present, otherwise the defaults.
pub async fn load_settings_with_options(options: &LoadOptions) -> Result<Settings, ConfigError> {
    let mut settings = match options.config_path {
        Some(ref path) => Settings::load_from_path(path).await?,
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.is_file() {
                Settings::load_from_path(path).await?
            } else {
                Settings::default()
            }
        }
    };

    if let Some(page_size) = options.page_size {
        settings.page_size = page_size;
    }
    if let Some(ref base_url) = options.base_url {
        settings.portal.base_url = base_url.clone();
    }

    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(content: &str) -> Result<Settings, ConfigError> {
        Settings::from_toml_str(content, Path::new("test.toml"))
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = parse("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.page_size, 10);
        assert_eq!(settings.retry.max_attempts, 3);
        assert_eq!(settings.download.ffmpeg, "ffmpeg");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let settings = parse(
            r#"
            page_size = 25

            [portal]
            lang = "en"
            request_delay_ms = 250

            [retry]
            max_attempts = 5
            "#,
        )
        .unwrap();

        assert_eq!(settings.page_size, 25);
        assert_eq!(settings.portal.lang, "en");
        assert_eq!(settings.portal.base_url, "https://media.fhs.cuni.cz");
        assert_eq!(settings.portal.request_delay_ms, 250);
        assert_eq!(settings.retry.max_attempts, 5);
        assert_eq!(settings.retry.initial_delay_ms, 50);
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse("page_size = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("test.toml"));
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let settings = Settings {
            page_size: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Invalid {
                key: "page_size",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let mut settings = Settings::default();
        settings.retry.max_attempts = 0;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Invalid {
                key: "retry.max_attempts",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_multiplier() {
        for multiplier in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let mut settings = Settings::default();
            settings.retry.backoff_multiplier = multiplier;
            assert!(settings.validate().is_err(), "accepted {}", multiplier);
        }
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut settings = Settings::default();
        settings.portal.base_url = "not a url".to_string();
        assert!(settings.validate().is_err());

        settings.portal.base_url = "ftp://media.example".to_string();
        assert!(settings.validate().is_err());

        settings.portal.base_url = "http://127.0.0.1:8080".to_string();
        assert!(settings.validate().is_ok());
    }

    #[tokio::test]
    async fn test_load_with_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 5\n[portal]\nbase_url = \"https://a.example\"").unwrap();

        let options = LoadOptions {
            config_path: Some(file.path().to_path_buf()),
            page_size: Some(50),
            base_url: None,
        };
        let settings = load_settings_with_options(&options).await.unwrap();
        assert_eq!(settings.page_size, 50);
        assert_eq!(settings.portal.base_url, "https://a.example");
    }

    #[tokio::test]
    async fn test_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let options = LoadOptions {
            config_path: Some(dir.path().join("absent.toml")),
            ..LoadOptions::default()
        };
        assert!(matches!(
            load_settings_with_options(&options).await,
            Err(ConfigError::Read { .. })
        ));
    }

    #[tokio::test]
    async fn test_override_is_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();

        let options = LoadOptions {
            config_path: Some(path),
            page_size: Some(0),
            base_url: None,
        };
        assert!(load_settings_with_options(&options).await.is_err());
    }
}
