//! Background fetch execution.
//!
//! Each request runs on its own short-lived thread so a slow, superseded
//! fetch never delays the one that replaced it. Completions are delivered
//! through a channel that the event loop drains without blocking.

use crate::model::{FetchError, PageSize, ResultPage};
use crate::source::ImageProvider;
use crate::state::{FetchRequest, FetchTicket};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Outcome of one fetch, tagged with the ticket it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
    /// Ticket of the request this completes.
    pub ticket: FetchTicket,
    /// The page, or why it could not be fetched.
    pub result: Result<ResultPage, FetchError>,
}

/// Runs provider fetches on background threads.
pub struct FetchWorker {
    provider: Arc<dyn ImageProvider>,
    page_size: PageSize,
    tx: Sender<FetchCompletion>,
    rx: Receiver<FetchCompletion>,
}

impl FetchWorker {
    /// Worker fetching `page_size` results per page from `provider`.
    pub fn new(provider: Arc<dyn ImageProvider>, page_size: PageSize) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            provider,
            page_size,
            tx,
            rx,
        }
    }

    /// Results requested per page.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Start `request` in the background. Never blocks.
    ///
    /// Superseded requests are not cancelled; the session discards their
    /// results when they arrive. Every request produces exactly one
    /// completion, including when the thread cannot start or the provider
    /// panics.
    pub fn spawn(&self, request: FetchRequest) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let page_size = self.page_size;
        let ticket = request.ticket;

        debug!(
            query = %request.query,
            page = request.page.get(),
            "Spawning fetch"
        );

        let spawned = thread::Builder::new()
            .name(format!("fetch-page-{}", request.page))
            .spawn(move || {
                let result = panic::catch_unwind(AssertUnwindSafe(|| {
                    provider.fetch_page(&request.query, request.page, page_size)
                }))
                .unwrap_or_else(|payload| {
                    let message = panic_message(payload.as_ref());
                    warn!(page = request.page.get(), %message, "Provider panicked");
                    Err(FetchError::Aborted(format!("provider panicked: {message}")))
                });
                // Receiver gone means the app is shutting down
                let _ = tx.send(FetchCompletion {
                    ticket: request.ticket,
                    result,
                });
            });

        if let Err(err) = spawned {
            warn!(error = %err, "Failed to spawn fetch thread");
            let _ = self.tx.send(FetchCompletion {
                ticket,
                result: Err(FetchError::Aborted(format!(
                    "could not start fetch thread: {err}"
                ))),
            });
        }
    }

    /// Drain all completions that have arrived. Non-blocking.
    pub fn poll(&self) -> Vec<FetchCompletion> {
        self.rx.try_iter().collect()
    }

    /// Wait up to `timeout` for the next completion.
    pub fn wait(&self, timeout: Duration) -> Option<FetchCompletion> {
        match self.rx.recv_timeout(timeout) {
            Ok(completion) => Some(completion),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
