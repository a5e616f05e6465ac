//! Harvest command: enumerate, resolve and download everything.

use std::time::Duration;

use anyhow::Context;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;

use crate::cli::helpers::{build_scraper, require_credential, require_directory};
use crate::config::Settings;
use crate::services::{FfmpegDownloader, HarvestEvent, HarvestOptions, Harvester};

/// Download every record of the catalog into `dir`.
pub async fn cmd_harvest(
    settings: &Settings,
    cookie: Option<&str>,
    dir: Option<&str>,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    // Everything that can be checked locally is checked before the first request.
    let credential = require_credential(cookie)?;
    let destination = require_directory(dir)?;
    let downloader = FfmpegDownloader::locate(&settings.download.ffmpeg)?;

    tokio::fs::create_dir_all(&destination)
        .await
        .with_context(|| format!("Failed to create {}", destination.display()))?;

    let scraper = build_scraper(settings)?;

    println!(
        "{} Harvesting {} into {}",
        style("→").cyan(),
        scraper.config().base_url,
        destination.display()
    );

    let (event_tx, mut event_rx) = mpsc::channel::<HarvestEvent>(100);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(120));

    let pb_events = pb.clone();
    let event_handler = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            match event {
                HarvestEvent::Resolving { name, .. } => {
                    pb_events.set_message(name);
                }
                HarvestEvent::Downloaded { destination, .. } => {
                    let file = destination
                        .file_name()
                        .map(|f| f.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    pb_events.println(format!("{} {}", style("✓").green(), file));
                }
                HarvestEvent::Failed { guid, name, error } => {
                    pb_events.println(format!(
                        "{} {} ({}): {}",
                        style("✗").red(),
                        name,
                        guid,
                        error
                    ));
                }
            }
        }
    });

    let harvester = Harvester::new(scraper, downloader).with_events(event_tx);
    let options = HarvestOptions {
        destination,
        page_size: settings.page_size,
        limit,
    };
    let summary = harvester.run(&credential, &options).await;

    // Closing the sender lets the event handler drain and exit.
    drop(harvester);
    if let Err(e) = event_handler.await {
        tracing::warn!("Event handler task failed: {}", e);
    }
    pb.finish_and_clear();

    println!(
        "{} Downloaded {} of {} videos",
        style("✓").green(),
        summary.downloaded,
        summary.seen
    );
    if summary.failed > 0 {
        println!("  {} {} failed", style("!").yellow(), summary.failed);
    }

    if let Some(e) = summary.catalog_error {
        anyhow::bail!("Catalog enumeration stopped early: {}", e);
    }
    Ok(())
}
