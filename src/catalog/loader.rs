use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::error;

use super::client::{FetchFailure, HttpCatalog};
use crate::models::FilmRecord;

pub type FetchResult = Result<Vec<FilmRecord>, FetchFailure>;

/// Outcome of checking on the background fetch.
#[derive(Debug)]
pub enum FetchPoll {
    /// Still waiting on the network.
    Pending,
    Ready(FetchResult),
    /// The worker went away without reporting anything.
    Closed,
}

/// Receiving end of the one-shot catalog fetch started at mount.
pub struct FetchHandle {
    rx: Receiver<FetchResult>,
}

impl FetchHandle {
    /// Start the fetch on a worker thread that drives its own current-thread
    /// runtime. The UI thread never blocks on it; it polls the handle instead.
    pub fn spawn(catalog: HttpCatalog) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime.block_on(catalog.fetch_all()),
                Err(err) => {
                    error!("failed to build fetch runtime: {err}");
                    Err(FetchFailure::Runtime(err))
                }
            };
            // The receiver is gone only when the UI already exited.
            let _ = tx.send(result);
        });
        Self { rx }
    }

    #[cfg(test)]
    pub(crate) fn from_receiver(rx: Receiver<FetchResult>) -> Self {
        Self { rx }
    }

    /// Non-blocking check for the fetch result.
    pub fn poll(&self) -> FetchPoll {
        match self.rx.try_recv() {
            Ok(result) => FetchPoll::Ready(result),
            Err(TryRecvError::Empty) => FetchPoll::Pending,
            Err(TryRecvError::Disconnected) => FetchPoll::Closed,
        }
    }
}
