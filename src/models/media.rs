//! A record resolved to a playable media URL.

use crate::utils::sanitize_filename;

use super::Record;

/// Container extension written by the download step.
pub const MEDIA_EXTENSION: &str = "mp4";

/// Result of resolving a [`Record`]'s detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMedia {
    pub guid: String,
    pub display_name: String,
    pub author_label: Option<String>,
    pub media_url: String,
}

impl ResolvedMedia {
    /// Combine a record with the URL found on its detail page.
    pub fn from_record(record: &Record, media_url: String) -> Self {
        Self {
            guid: record.guid.clone(),
            display_name: record.name.clone(),
            author_label: record.author_label().map(str::to_string),
            media_url,
        }
    }

    /// Human-readable destination filename: `Name (Author) - guid.mp4`.
    ///
    /// The parenthesized author is left out when the record has none, and a
    /// name with nothing usable left after sanitizing leaves just `guid.mp4`.
    pub fn file_name(&self) -> String {
        let guid = sanitize_filename(&self.guid);
        let name = sanitize_filename(&self.display_name);
        if name.is_empty() {
            return format!("{}.{}", guid, MEDIA_EXTENSION);
        }

        let author = self
            .author_label
            .as_deref()
            .map(sanitize_filename)
            .filter(|a| !a.is_empty())
            .map(|a| format!(" ({})", a))
            .unwrap_or_default();
        format!("{}{} - {}.{}", name, author, guid, MEDIA_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(name: &str, author: Option<&str>) -> ResolvedMedia {
        ResolvedMedia {
            guid: "abc-123".to_string(),
            display_name: name.to_string(),
            author_label: author.map(str::to_string),
            media_url: "https://cdn.example/stream.m3u8".to_string(),
        }
    }

    #[test]
    fn test_file_name_with_author() {
        assert_eq!(
            media("Úvod do sociologie", Some("Jan Novák")).file_name(),
            "Úvod do sociologie (Jan Novák) - abc-123.mp4"
        );
    }

    #[test]
    fn test_file_name_without_author() {
        assert_eq!(media("Seminář", None).file_name(), "Seminář - abc-123.mp4");
    }

    #[test]
    fn test_file_name_strips_path_separators() {
        assert_eq!(
            media("2023/24: Zimní semestr", Some("A/B")).file_name(),
            "2023_24_ Zimní semestr (A_B) - abc-123.mp4"
        );
    }

    #[test]
    fn test_file_name_falls_back_to_guid() {
        assert_eq!(media("???", Some("Jan Novák")).file_name(), "abc-123.mp4");
        assert_eq!(media("  ", None).file_name(), "abc-123.mp4");
    }

    #[test]
    fn test_file_name_drops_unusable_author() {
        assert_eq!(
            media("Seminář", Some("<>")).file_name(),
            "Seminář - abc-123.mp4"
        );
    }

    #[test]
    fn test_from_record_drops_blank_author() {
        let record = Record {
            guid: "g-1".to_string(),
            name: "Lecture".to_string(),
            author: Some(String::new()),
            description: None,
            duration_seconds_formatted: None,
            created_utc: None,
            media_type_name: None,
        };
        let resolved = ResolvedMedia::from_record(&record, "https://x/y".to_string());
        assert_eq!(resolved.author_label, None);
        assert_eq!(resolved.file_name(), "Lecture - g-1.mp4");
    }
}
