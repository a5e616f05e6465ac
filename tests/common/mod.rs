//! Fake portal and test doubles shared by the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use mediaharvest::services::{DownloadError, Downloader};
use mediaharvest::{Credential, PortalConfig, PortalScraper, RetryPolicy};

pub const COOKIE: &str = "session=abc123";
pub const SEARCH_PATH: &str = "/cs/MediaAjax/Search";

/// Catalog entry served by the fake portal.
#[derive(Debug, Clone)]
pub struct FakeRecord {
    pub guid: String,
    pub name: String,
    pub author: String,
}

/// `count` records named `Lecture N` with guids `guid-N`, authors on odd ones only.
pub fn fake_catalog(count: usize) -> Vec<FakeRecord> {
    (1..=count)
        .map(|n| FakeRecord {
            guid: format!("guid-{:02}", n),
            name: format!("Lecture {}", n),
            author: if n % 2 == 1 {
                format!("Author {}", n)
            } else {
                String::new()
            },
        })
        .collect()
}

/// Answers search POSTs by slicing the catalog according to `Page` and `PageSize`.
pub struct CatalogResponder {
    records: Vec<FakeRecord>,
}

impl CatalogResponder {
    pub fn new(records: Vec<FakeRecord>) -> Self {
        Self { records }
    }
}

impl Respond for CatalogResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut page = 1usize;
        let mut size = 10usize;
        for (key, value) in url::form_urlencoded::parse(&request.body) {
            match key.as_ref() {
                "Page" => page = value.parse().unwrap_or(1),
                "PageSize" => size = value.parse().unwrap_or(10),
                _ => {}
            }
        }

        let total = self.records.len();
        let total_pages = total.div_ceil(size).max(1);
        let items: Vec<_> = self
            .records
            .iter()
            .skip((page - 1) * size)
            .take(size)
            .map(|r| {
                json!({
                    "Guid": r.guid,
                    "Name": r.name,
                    "Author": r.author,
                    "Description": "",
                    "DurationSecondsFormatted": "01:30:00",
                    "MediaTypeName": "Video"
                })
            })
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({
            "Success": true,
            "Message": "",
            "Data": {
                "CurrentPage": page,
                "TotalPages": total_pages,
                "TotalItems": total,
                "ItemsPerPage": size,
                "Items": items
            },
            "Context": null
        }))
    }
}

/// Detail page markup for a stream URL.
pub fn detail_html(media_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>Detail</title></head>
<body>
  <div class="media-player">
    <video controls preload="none">
      <source src="{}" type="application/x-mpegURL">
    </video>
  </div>
</body></html>"#,
        media_url.replace('&', "&amp;")
    )
}

/// Stream URL the fake portal advertises for a guid.
pub fn media_url_for(guid: &str) -> String {
    format!("https://stream.example/{}/index.m3u8?token=t&expires=1", guid)
}

/// Mount a detail page for every record, each expected to be fetched `times` times.
pub async fn mount_detail_pages(server: &MockServer, records: &[FakeRecord], times: u64) {
    for record in records {
        Mock::given(method("GET"))
            .and(path(format!("/cs/media/{}", record.guid)))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(detail_html(&media_url_for(&record.guid))),
            )
            .expect(times)
            .mount(server)
            .await;
    }
}

/// Mount the catalog endpoint with the given records.
pub async fn mount_catalog(server: &MockServer, records: Vec<FakeRecord>) {
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(CatalogResponder::new(records))
        .mount(server)
        .await;
}

/// Three attempts without meaningful delays.
pub fn test_policy() -> RetryPolicy {
    RetryPolicy::new(3, Duration::from_millis(1), 1.0)
}

pub fn scraper_for(server: &MockServer) -> PortalScraper {
    let config = PortalConfig {
        base_url: server.uri(),
        ..PortalConfig::default()
    };
    PortalScraper::new(config, test_policy()).unwrap()
}

pub fn credential() -> Credential {
    Credential::new(COOKIE).unwrap()
}

/// Downloader that records its calls instead of running ffmpeg.
#[derive(Clone, Default)]
pub struct RecordingDownloader {
    calls: Arc<Mutex<Vec<(String, PathBuf)>>>,
}

impl RecordingDownloader {
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Downloader for RecordingDownloader {
    async fn download(&self, url: &str, destination: &Path) -> Result<(), DownloadError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), destination.to_path_buf()));
        Ok(())
    }
}

/// Downloader whose ffmpeg run fails for destinations naming `failing_guid`.
#[derive(Clone)]
pub struct FlakyDownloader {
    failing_guid: String,
    calls: Arc<Mutex<Vec<(String, PathBuf)>>>,
}

impl FlakyDownloader {
    pub fn failing_for(guid: &str) -> Self {
        Self {
            failing_guid: guid.to_string(),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Downloader for FlakyDownloader {
    async fn download(&self, url: &str, destination: &Path) -> Result<(), DownloadError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), destination.to_path_buf()));

        let name = destination.to_string_lossy();
        if name.contains(&format!("- {}.mp4", self.failing_guid)) {
            return Err(DownloadError::Failed {
                tool: "ffmpeg".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "Server returned 403 Forbidden".to_string(),
            });
        }
        Ok(())
    }
}
