use crate::film_list::SortKey;

/// Open sort selector popup. Tracks which of the two choices is highlighted.
pub(crate) struct SortMenu {
    pub(crate) highlighted: usize,
}

impl SortMenu {
    /// Open the menu with the active key highlighted.
    pub(crate) fn new(current: SortKey) -> Self {
        let highlighted = SortKey::ALL
            .iter()
            .position(|key| *key == current)
            .unwrap_or(0);
        Self { highlighted }
    }

    pub(crate) fn move_highlight(&mut self, offset: isize) {
        let last = SortKey::ALL.len() as isize - 1;
        let next = (self.highlighted as isize + offset).clamp(0, last);
        self.highlighted = next as usize;
    }

    pub(crate) fn choice(&self) -> SortKey {
        SortKey::ALL[self.highlighted]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_active_key() {
        assert_eq!(SortMenu::new(SortKey::ReleaseDate).choice(), SortKey::ReleaseDate);
        assert_eq!(SortMenu::new(SortKey::EpisodeId).choice(), SortKey::EpisodeId);
    }

    #[test]
    fn highlight_stays_in_bounds() {
        let mut menu = SortMenu::new(SortKey::EpisodeId);
        menu.move_highlight(-1);
        assert_eq!(menu.choice(), SortKey::EpisodeId);
        menu.move_highlight(5);
        assert_eq!(menu.choice(), SortKey::ReleaseDate);
    }
}
