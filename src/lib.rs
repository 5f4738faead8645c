//! Terminal film browser: loads the film catalog once, then lets the user
//! search titles, pick a sort order and read the details of one film.
//!
//! The pure pieces (numeral conversion, list derivation, selection) live in
//! their own modules so they can be exercised without a terminal.
pub mod catalog;
pub mod film_list;
pub mod logging;
pub mod models;
pub mod roman;
pub mod selection;
pub mod ui;

pub use catalog::{FetchFailure, FetchHandle, HttpCatalog, DEFAULT_CATALOG_URL};
pub use film_list::{visible_films, FilmListModel, SortKey};
pub use logging::init_logging;
pub use models::FilmRecord;
pub use roman::to_roman;
pub use selection::SelectionState;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
