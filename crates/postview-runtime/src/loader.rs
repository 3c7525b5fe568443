use std::sync::Arc;

use postview_types::Post;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{Error, Result};
use crate::browser::Generation;
use crate::source::PostSource;

/// Result of one fetch, tagged with the load that issued it
#[derive(Debug)]
pub struct LoadOutcome {
    pub generation: Generation,
    pub result: Result<Vec<Post>>,
}

struct InFlight {
    generation: Generation,
    origin: String,
    handle: JoinHandle<()>,
}

/// Runs fetches as abortable tokio tasks.
///
/// At most one fetch is in flight. Starting a new one aborts the previous
/// task, and dropping the loader aborts whatever is still running, so no
/// outcome is delivered after the owner is gone. A task that ends without
/// sending (a panicking source) is reported as a failed fetch.
pub struct Loader {
    tx: UnboundedSender<LoadOutcome>,
    rx: UnboundedReceiver<LoadOutcome>,
    in_flight: Option<InFlight>,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            in_flight: None,
        }
    }

    /// Spawn a fetch on the current tokio runtime.
    ///
    /// Must be called from within a runtime context.
    pub fn start<S: PostSource>(&mut self, generation: Generation, source: Arc<S>) {
        self.cancel();

        let origin = source.describe();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let result = source.fetch().await;
            // Receiver gone means the loader was dropped mid-send
            let _ = tx.send(LoadOutcome { generation, result });
        });

        self.in_flight = Some(InFlight {
            generation,
            origin,
            handle,
        });
    }

    /// Abort the in-flight fetch, if any. Returns whether a task was aborted.
    pub fn cancel(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.take() else {
            return false;
        };
        if in_flight.handle.is_finished() {
            return false;
        }
        debug!(generation = in_flight.generation, "cancelling load");
        in_flight.handle.abort();
        true
    }

    /// Next ready outcome, without waiting
    pub fn try_next(&mut self) -> Option<LoadOutcome> {
        if let Some(outcome) = self.receive() {
            return Some(outcome);
        }

        let finished = self
            .in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.handle.is_finished());
        if !finished {
            return None;
        }

        // The task sends before it finishes, so a second look sees any
        // outcome that raced with the first.
        if let Some(outcome) = self.receive() {
            return Some(outcome);
        }
        self.in_flight.take().map(abandoned)
    }

    /// Wait for the next outcome. Returns `None` when nothing is in flight.
    pub async fn next(&mut self) -> Option<LoadOutcome> {
        if let Some(outcome) = self.try_next() {
            return Some(outcome);
        }

        let received = {
            let in_flight = self.in_flight.as_mut()?;
            tokio::select! {
                received = self.rx.recv() => received,
                _ = &mut in_flight.handle => None,
            }
        };

        match received {
            Some(outcome) => {
                self.settle(outcome.generation);
                Some(outcome)
            }
            None => self.try_next(),
        }
    }

    fn receive(&mut self) -> Option<LoadOutcome> {
        let outcome = self.rx.try_recv().ok()?;
        self.settle(outcome.generation);
        Some(outcome)
    }

    fn settle(&mut self, generation: Generation) {
        if self
            .in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.generation == generation)
        {
            self.in_flight = None;
        }
    }
}

fn abandoned(in_flight: InFlight) -> LoadOutcome {
    warn!(
        generation = in_flight.generation,
        origin = %in_flight.origin,
        "load task ended without an outcome"
    );
    LoadOutcome {
        generation: in_flight.generation,
        result: Err(Error::fetch(in_flight.origin, "fetch task ended unexpectedly")),
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        self.cancel();
    }
}
