//! Tracks which film, if any, the detail pane shows.

use crate::models::FilmRecord;

/// Current detail selection. Starts empty; there is no way back to empty once
/// a film has been chosen.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<FilmRecord>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `film`. Returns `false` when it was already the selection, in
    /// which case nothing changes.
    pub fn select(&mut self, film: &FilmRecord) -> bool {
        if self.is_selected(film) {
            return false;
        }
        self.selected = Some(film.clone());
        true
    }

    pub fn selected(&self) -> Option<&FilmRecord> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, film: &FilmRecord) -> bool {
        self.selected.as_ref() == Some(film)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::film;

    #[test]
    fn starts_empty() {
        let selection = SelectionState::new();
        assert!(selection.selected().is_none());
    }

    #[test]
    fn select_replaces_previous_choice() {
        let hope = film(4, "A New Hope", "1977-05-25");
        let empire = film(5, "The Empire Strikes Back", "1980-05-17");
        let mut selection = SelectionState::new();

        assert!(selection.select(&hope));
        assert_eq!(selection.selected(), Some(&hope));
        assert!(selection.select(&empire));
        assert_eq!(selection.selected(), Some(&empire));
        assert!(!selection.is_selected(&hope));
    }

    #[test]
    fn reselecting_is_a_no_op() {
        let hope = film(4, "A New Hope", "1977-05-25");
        let mut selection = SelectionState::new();
        selection.select(&hope);
        assert!(!selection.select(&hope));
        assert_eq!(selection.selected(), Some(&hope));
    }
}
