use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Spaces placed between two pieces of text so the second one ends flush with
/// `width`. Always at least one space, even when the row is already full.
pub(crate) fn padding_between(used: usize, width: usize) -> String {
    " ".repeat(width.saturating_sub(used).max(1))
}

/// Cut `text` to at most `max` characters, marking the cut with `…`.
pub(crate) fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Horizontal rule spanning `width` columns.
pub(crate) fn rule(width: usize) -> String {
    "─".repeat(width)
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for the sort menu popup.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_fills_remaining_width() {
        assert_eq!(padding_between(7, 10), "   ");
        assert_eq!(padding_between(10, 10), " ");
        assert_eq!(padding_between(15, 10), " ");
    }

    #[test]
    fn truncation_marks_the_cut() {
        assert_eq!(truncate_with_ellipsis("Return of the Jedi", 40), "Return of the Jedi");
        assert_eq!(truncate_with_ellipsis("Return of the Jedi", 9), "Return o…");
        assert_eq!(truncate_with_ellipsis("Return", 1), "…");
        assert_eq!(truncate_with_ellipsis("Return", 0), "");
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(40, 50, area);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 10);
    }
}
