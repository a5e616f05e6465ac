//! List catalog records (dry run).

use console::style;
use futures::TryStreamExt;

use crate::cli::helpers::{build_scraper, require_credential};
use crate::config::Settings;

/// Print guid, name and author of every record in server order.
pub async fn cmd_list(settings: &Settings, cookie: Option<&str>, limit: Option<usize>) -> anyhow::Result<()> {
    let credential = require_credential(cookie)?;
    let scraper = build_scraper(settings)?;

    let mut records = std::pin::pin!(scraper.enumerate(settings.page_size, &credential));
    let mut count = 0usize;

    while limit.map_or(true, |limit| count < limit) {
        let Some(record) = records.try_next().await? else {
            break;
        };
        count += 1;
        match record.author_label() {
            Some(author) => println!(
                "{}  {} {}",
                style(&record.guid).dim(),
                record.name,
                style(format!("({})", author)).cyan()
            ),
            None => println!("{}  {}", style(&record.guid).dim(), record.name),
        }
    }

    println!("{} {} records", style("✓").green(), count);
    Ok(())
}
