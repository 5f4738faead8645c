//! Domain model for a single catalog entry. Records arrive from the catalog
//! endpoint once and are never modified afterwards, so the type stays a plain
//! data holder that the list model, selection and renderer all borrow from.

use std::fmt;

use serde::Deserialize;

use crate::roman::to_roman;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// One film as returned by the catalog. Field names match the JSON payload;
/// any extra fields the endpoint sends are ignored during decoding.
pub struct FilmRecord {
    /// Title shown in the list and used for searching.
    pub title: String,
    /// Narrative episode number. Drives the default sort order and the Roman
    /// numeral shown next to the title.
    pub episode_id: i64,
    /// Release date in `YYYY-MM-DD` form. Kept as text because the fixed width
    /// format already orders chronologically when compared as a string.
    pub release_date: String,
    /// Multi-line synopsis rendered in the detail pane.
    pub opening_crawl: String,
    pub director: String,
}

impl FilmRecord {
    /// Compose the `Episode IV - A New Hope` heading used by both the list
    /// entries and the detail pane.
    pub fn display_title(&self) -> String {
        format!("Episode {} - {}", to_roman(self.episode_id), self.title)
    }
}

impl fmt::Display for FilmRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
pub(crate) fn film(episode_id: i64, title: &str, release_date: &str) -> FilmRecord {
    FilmRecord {
        title: title.to_string(),
        episode_id,
        release_date: release_date.to_string(),
        opening_crawl: format!("Crawl for {title}.\r\nSecond line."),
        director: "George Lucas".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_title_uses_roman_episode() {
        let record = film(4, "A New Hope", "1977-05-25");
        assert_eq!(record.display_title(), "Episode IV - A New Hope");
        assert_eq!(record.to_string(), "A New Hope");
    }

    #[test]
    fn deserializes_catalog_fields_and_ignores_extras() {
        let json = r#"{
            "title": "The Empire Strikes Back",
            "episode_id": 5,
            "opening_crawl": "It is a dark time\r\nfor the Rebellion.",
            "director": "Irvin Kershner",
            "producer": "Gary Kurtz, Rick McCallum",
            "release_date": "1980-05-17",
            "characters": []
        }"#;
        let record: FilmRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.episode_id, 5);
        assert_eq!(record.director, "Irvin Kershner");
        assert_eq!(record.release_date, "1980-05-17");
    }
}
