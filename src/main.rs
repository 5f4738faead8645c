//! Binary entry point: set up logging, start the one-shot catalog fetch and
//! drive the Ratatui event loop until the user exits.
use film_browser::{init_logging, run_app, App, FetchHandle, HttpCatalog};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let log_path = init_logging()?;
    info!(log = %log_path.display(), "film browser starting");

    let catalog = HttpCatalog::default();
    info!(url = catalog.url(), "fetching film catalog");
    let fetch = FetchHandle::spawn(catalog);

    let mut app = App::new(fetch);
    run_app(&mut app)
}
