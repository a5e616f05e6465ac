//! Media download adapters.
//!
//! The harvester hands every resolved stream to a [`Downloader`]. The
//! production adapter remuxes the stream into an MP4 file with ffmpeg.

mod types;

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::ConfigError;

pub use types::DownloadError;

/// Something that can store a media URL at a local path.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Fetch `url` into `destination`, returning once the file is complete.
    async fn download(&self, url: &str, destination: &Path) -> Result<(), DownloadError>;
}

/// Downloads by running `ffmpeg -codec copy`, never re-encoding or overwriting.
#[derive(Debug, Clone)]
pub struct FfmpegDownloader {
    binary: PathBuf,
}

impl FfmpegDownloader {
    /// Use the given ffmpeg binary as is.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Find the ffmpeg binary by name or path.
    pub fn locate(binary: &str) -> Result<Self, ConfigError> {
        let path = which::which(binary).map_err(|_| ConfigError::ToolNotFound(binary.to_string()))?;
        debug!("Using ffmpeg at {}", path.display());
        Ok(Self::new(path))
    }

    /// Build the ffmpeg invocation for one download.
    pub fn command(&self, url: &str, destination: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(["-hide_banner", "-loglevel", "error", "-n", "-i"])
            .arg(url)
            .args(["-codec", "copy"])
            .arg(destination)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }

    fn tool_name(&self) -> String {
        self.binary.display().to_string()
    }
}

#[async_trait]
impl Downloader for FfmpegDownloader {
    async fn download(&self, url: &str, destination: &Path) -> Result<(), DownloadError> {
        if tokio::fs::try_exists(destination).await? {
            return Err(DownloadError::AlreadyExists(destination.to_path_buf()));
        }

        debug!("Running {} for {}", self.tool_name(), destination.display());
        let output = self
            .command(url, destination)
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => DownloadError::ToolNotFound(self.tool_name()),
                _ => DownloadError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("ffmpeg stderr: {}", stderr);
            return Err(DownloadError::Failed {
                tool: self.tool_name(),
                status: output.status.to_string(),
                stderr,
            });
        }

        info!("Downloaded: {}", destination.display());
        Ok(())
    }
}
