use std::mem;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, error, info, warn};

use crate::catalog::{FetchHandle, FetchPoll};
use crate::film_list::{FilmListModel, SortKey};
use crate::models::FilmRecord;
use crate::selection::SelectionState;

use super::helpers::centered_rect;
use super::menu::SortMenu;
use super::view::{detail_lines, film_list_items, SEARCH_PLACEHOLDER};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height of the search/sort bar at the top.
const HEADER_HEIGHT: u16 = 3;
const SORT_BUTTON_WIDTH: u16 = 22;
/// Rows skipped by PgUp/PgDn.
const PAGE_STEP: isize = 5;
const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Input modes. Normal drives the list, the others own the keyboard until
/// they are closed.
enum Mode {
    Normal,
    Searching,
    SortMenu(SortMenu),
}

/// View-model for the whole screen. Owns the fetched films and every piece of
/// UI state; nothing outlives it.
pub struct App {
    films: Vec<FilmRecord>,
    list: FilmListModel,
    selection: SelectionState,
    cursor: usize,
    mode: Mode,
    /// Informational footer message. Errors are only ever logged.
    status: Option<String>,
    fetch: Option<FetchHandle>,
}

impl App {
    /// Build the view around a fetch that is already in flight. The list stays
    /// empty until [`App::poll_fetch`] sees the result.
    pub fn new(fetch: FetchHandle) -> Self {
        Self {
            films: Vec::new(),
            list: FilmListModel::new(),
            selection: SelectionState::new(),
            cursor: 0,
            mode: Mode::Normal,
            status: None,
            fetch: Some(fetch),
        }
    }

    /// Check on the initial fetch. Once a result (or a dead worker) is seen the
    /// handle is dropped, so the catalog is only ever loaded once. Failures are
    /// logged and leave the list empty.
    pub fn poll_fetch(&mut self) {
        let Some(handle) = &self.fetch else {
            return;
        };

        match handle.poll() {
            FetchPoll::Pending => return,
            FetchPoll::Ready(Ok(films)) => {
                info!(count = films.len(), "films loaded");
                self.set_status(format!("Loaded {} films.", films.len()));
                self.films = films;
                self.clamp_cursor();
            }
            FetchPoll::Ready(Err(err)) => {
                error!("error fetching movies: {err}");
            }
            FetchPoll::Closed => {
                warn!("catalog fetch ended without a result");
            }
        }

        self.fetch = None;
    }

    /// Feed one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(key.code, &mut exit),
            Mode::Searching => self.handle_search(key),
            Mode::SortMenu(menu) => self.handle_sort_menu(key.code, menu),
        };

        exit
    }

    pub fn films(&self) -> &[FilmRecord] {
        &self.films
    }

    pub fn visible_films(&self) -> Vec<&FilmRecord> {
        self.list.visible(&self.films)
    }

    pub fn selected_film(&self) -> Option<&FilmRecord> {
        self.selection.selected()
    }

    pub fn sort_key(&self) -> SortKey {
        self.list.sort_key()
    }

    pub fn search_term(&self) -> &str {
        self.list.search_term()
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-PAGE_STEP),
            KeyCode::PageDown => self.move_cursor(PAGE_STEP),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.visible_films().len().saturating_sub(1),
            KeyCode::Enter => self.select_under_cursor(),
            KeyCode::Char('f') | KeyCode::Char('/') => {
                self.clear_status();
                return Mode::Searching;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.clear_status();
                return Mode::SortMenu(SortMenu::new(self.list.sort_key()));
            }
            _ => {}
        }
        Mode::Normal
    }

    fn handle_search(&mut self, key: KeyEvent) -> Mode {
        match key.code {
            KeyCode::Esc => {
                self.list.clear_search();
                self.clamp_cursor();
                return Mode::Normal;
            }
            KeyCode::Enter => return Mode::Normal,
            KeyCode::Up => {
                self.move_cursor(-1);
                return Mode::Searching;
            }
            KeyCode::Down => {
                self.move_cursor(1);
                return Mode::Searching;
            }
            KeyCode::Backspace => self.list.pop_search_char(),
            // Chords such as Ctrl+U or Alt+F are shortcuts, not text.
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                return Mode::Searching;
            }
            KeyCode::Char(ch) => {
                if !self.list.push_search_char(ch) {
                    return Mode::Searching;
                }
            }
            _ => return Mode::Searching,
        }

        debug!(term = self.list.search_term(), "search term changed");
        self.clamp_cursor();
        Mode::Searching
    }

    fn handle_sort_menu(&mut self, code: KeyCode, mut menu: SortMenu) -> Mode {
        match code {
            // Dismissing keeps whatever order was active.
            KeyCode::Esc => Mode::Normal,
            KeyCode::Up => {
                menu.move_highlight(-1);
                Mode::SortMenu(menu)
            }
            KeyCode::Down => {
                menu.move_highlight(1);
                Mode::SortMenu(menu)
            }
            KeyCode::Enter => {
                let key = menu.choice();
                self.list.set_sort_key(key);
                self.cursor = 0;
                info!(sort = key.label(), "sort order changed");
                self.set_status(format!("Sorted by {}.", key.label()));
                Mode::Normal
            }
            _ => Mode::SortMenu(menu),
        }
    }

    fn select_under_cursor(&mut self) {
        let Some(film) = self.visible_films().get(self.cursor).map(|film| (*film).clone()) else {
            return;
        };
        if self.selection.select(&film) {
            debug!(episode = film.episode_id, title = %film.title, "film selected");
        }
    }

    fn move_cursor(&mut self, offset: isize) {
        let len = self.visible_films().len() as isize;
        if len == 0 {
            return;
        }
        let next = (self.cursor as isize + offset).clamp(0, len - 1);
        self.cursor = next as usize;
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_films().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        self.draw_film_list(frame, body[0]);
        self.draw_details(frame, body[1]);

        self.draw_footer(frame, chunks[2]);

        if let Mode::SortMenu(menu) = &self.mode {
            self.draw_sort_menu(frame, area, menu);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SORT_BUTTON_WIDTH), Constraint::Min(0)])
            .split(area);

        let sort_button = Paragraph::new(Line::from(vec![
            Span::styled("Sort By.. ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(self.list.sort_key().label()),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(sort_button, chunks[0]);

        let searching = matches!(self.mode, Mode::Searching);
        let mut block = Block::default().borders(Borders::ALL).title("Search");
        if searching {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }

        let term = self.list.search_term();
        let content = if term.is_empty() {
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(term.to_string())
        };
        let inner = block.inner(chunks[1]);
        frame.render_widget(Paragraph::new(content).block(block), chunks[1]);

        if searching {
            let cursor_x = inner.x + term.chars().count() as u16;
            frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }

    fn draw_film_list(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Films");
        let inner = block.inner(area);
        let width = (inner.width as usize).saturating_sub(HIGHLIGHT_SYMBOL.chars().count());

        let visible = self.visible_films();
        let list = List::new(film_list_items(&visible, width))
            .block(block)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        let mut list_state = ListState::default();
        if !visible.is_empty() {
            list_state.select(Some(self.cursor));
        }
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn draw_details(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(detail_lines(self.selection.selected()))
            .block(Block::default().borders(Borders::ALL).title("Details"))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn draw_sort_menu(&self, frame: &mut Frame, area: Rect, menu: &SortMenu) {
        let popup_area = centered_rect(30, 30, area);
        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = SortKey::ALL
            .iter()
            .map(|key| ListItem::new(key.label()))
            .collect();
        let list = List::new(items)
            .block(Block::default().title("Sort By").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        let mut list_state = ListState::default();
        list_state.select(Some(menu.highlighted));
        frame.render_stateful_widget(list, popup_area, &mut list_state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(Span::styled(status.clone(), Style::default().fg(Color::Green)))
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match &self.mode {
            Mode::Normal => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Details   "),
                Span::styled("[f]", key_style),
                Span::raw(" Search   "),
                Span::styled("[s]", key_style),
                Span::raw(" Sort   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            Mode::Searching => Line::from(vec![
                Span::styled("[Type]", key_style),
                Span::raw(" Filter   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Done   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Clear"),
            ]),
            Mode::SortMenu(_) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Choose   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Apply   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S) {
        self.status = Some(text.into());
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
