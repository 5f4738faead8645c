//! Ratatui front-end: the view-model, its rendering helpers and the terminal
//! event loop.

mod app;
mod helpers;
mod menu;
mod terminal;
mod view;

pub use app::App;
pub use terminal::run_app;
