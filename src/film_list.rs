//! Derived film list: title search plus a selectable sort order.
//!
//! The visible list is never stored. [`visible_films`] recomputes it from the
//! fetched records on demand, which keeps the source slice untouched so later
//! searches always start from the full catalog again.

use std::cmp::Ordering;

use crate::models::FilmRecord;

/// Fields the list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    EpisodeId,
    ReleaseDate,
}

impl SortKey {
    /// Menu order for the sort selector.
    pub const ALL: [SortKey; 2] = [SortKey::EpisodeId, SortKey::ReleaseDate];

    /// Label shown in the sort menu and the header bar.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::EpisodeId => "Episode",
            SortKey::ReleaseDate => "Year",
        }
    }

    /// Typed comparator for this key.
    fn comparator(self) -> fn(&FilmRecord, &FilmRecord) -> Ordering {
        match self {
            SortKey::EpisodeId => by_episode,
            SortKey::ReleaseDate => by_release_date,
        }
    }

    /// Ascending comparison of two records under this key.
    pub fn compare(self, a: &FilmRecord, b: &FilmRecord) -> Ordering {
        (self.comparator())(a, b)
    }
}

fn by_episode(a: &FilmRecord, b: &FilmRecord) -> Ordering {
    a.episode_id.cmp(&b.episode_id)
}

// `YYYY-MM-DD` sorts chronologically as plain text.
fn by_release_date(a: &FilmRecord, b: &FilmRecord) -> Ordering {
    a.release_date.cmp(&b.release_date)
}

/// Case-insensitive substring match against the title. An empty term matches
/// every film.
pub fn matches_search(film: &FilmRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    film.title.to_lowercase().contains(&term.to_lowercase())
}

/// Filter `films` by `term`, then stable-sort ascending by `key`.
///
/// Films with equal keys keep their relative order from `films`, so calling
/// this repeatedly with the same inputs always yields the same sequence.
pub fn visible_films<'a>(
    films: &'a [FilmRecord],
    term: &str,
    key: SortKey,
) -> Vec<&'a FilmRecord> {
    let mut visible: Vec<&FilmRecord> = films
        .iter()
        .filter(|film| matches_search(film, term))
        .collect();
    visible.sort_by(|a, b| key.compare(a, b));
    visible
}

/// Search term and sort key driving the visible list.
#[derive(Debug, Clone, Default)]
pub struct FilmListModel {
    search_term: String,
    sort_key: SortKey,
}

impl FilmListModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn set_search_term<S: Into<String>>(&mut self, term: S) {
        self.search_term = term.into();
    }

    /// Append a typed character. Control characters are ignored and reported
    /// back as `false`.
    pub fn push_search_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.search_term.push(ch);
        true
    }

    pub fn pop_search_char(&mut self) {
        self.search_term.pop();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Current visible list over `films`.
    pub fn visible<'a>(&self, films: &'a [FilmRecord]) -> Vec<&'a FilmRecord> {
        visible_films(films, &self.search_term, self.sort_key)
    }
}
