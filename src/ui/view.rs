//! Line builders for the film list and the detail pane. Kept free of frame
//! handling so the exact text can be checked without a terminal.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use crate::models::FilmRecord;

use super::helpers::{padding_between, rule, truncate_with_ellipsis};

/// Shown in the detail pane until a film is chosen.
pub(crate) const NO_SELECTION: &str = "No movie selected";
/// Shown in the search box while the term is empty.
pub(crate) const SEARCH_PLACEHOLDER: &str = "Search movies....";
/// Gap between the `EPISODE n` label and the heading.
const ENTRY_GAP: usize = 2;

/// One list row: plain episode label, bold heading, release date pushed to
/// the right edge of `width`. The date always keeps its place; the heading is
/// shortened when the row is too narrow for all three parts.
pub(crate) fn film_entry_line(film: &FilmRecord, width: usize) -> Line<'static> {
    let label = format!("EPISODE {}", film.episode_id);
    let date_width = film.release_date.chars().count();
    let heading_room = width.saturating_sub(label.chars().count() + ENTRY_GAP + 1 + date_width);
    let heading = truncate_with_ellipsis(&film.display_title(), heading_room);
    let used = label.chars().count() + ENTRY_GAP + heading.chars().count() + date_width;

    Line::from(vec![
        Span::raw(label),
        Span::raw(" ".repeat(ENTRY_GAP)),
        Span::styled(heading, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(padding_between(used, width)),
        Span::styled(film.release_date.clone(), Style::default().fg(Color::Gray)),
    ])
}

/// List items for the visible films. Every entry but the last carries a
/// separator rule beneath it.
pub(crate) fn film_list_items(films: &[&FilmRecord], width: usize) -> Vec<ListItem<'static>> {
    let last = films.len().saturating_sub(1);
    films
        .iter()
        .enumerate()
        .map(|(index, film)| {
            let mut lines = vec![film_entry_line(film, width)];
            if index != last {
                lines.push(Line::from(Span::styled(
                    rule(width),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ListItem::new(lines)
        })
        .collect()
}

/// Detail pane content for the current selection.
pub(crate) fn detail_lines(selected: Option<&FilmRecord>) -> Vec<Line<'static>> {
    let Some(film) = selected else {
        return vec![Line::from(NO_SELECTION)];
    };

    let mut lines = vec![
        Line::from(Span::styled(
            film.display_title(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(film.opening_crawl.lines().map(|line| Line::from(line.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Director : {}", film.director)));
    lines
}

#[cfg(test)]
pub(crate) fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}
