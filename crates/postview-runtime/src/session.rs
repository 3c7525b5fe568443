use std::sync::Arc;

use tracing::debug;

use crate::browser::PostBrowser;
use crate::loader::{LoadOutcome, Loader};
use crate::source::PostSource;

/// One mounted post browser: its state, its source and its pending load.
///
/// The session lives on the thread that renders it. Fetches run on the tokio
/// runtime and only touch state when their outcome is applied here.
pub struct BrowserSession<S: PostSource> {
    source: Arc<S>,
    browser: PostBrowser,
    loader: Loader,
    mounted: bool,
}

impl<S: PostSource> BrowserSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            browser: PostBrowser::new(),
            loader: Loader::new(),
            mounted: false,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn browser(&self) -> &PostBrowser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut PostBrowser {
        &mut self.browser
    }

    /// Issue the initial load. Later calls do nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        debug!(source = %self.source.describe(), "mounting browser");
        self.start_load();
    }

    /// Reload the collection, superseding any load still in flight.
    pub fn refresh(&mut self) {
        self.mounted = true;
        self.start_load();
    }

    /// Apply every outcome that is already available. Returns whether the
    /// browser state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Some(outcome) = self.loader.try_next() {
            changed |= self.apply(outcome);
        }
        changed
    }

    /// Wait for the pending load and apply it. Returns `false` when nothing
    /// was pending or the outcome was stale.
    pub async fn next_outcome(&mut self) -> bool {
        match self.loader.next().await {
            Some(outcome) => self.apply(outcome),
            None => false,
        }
    }

    /// Cancel the pending load and discard outcomes that were not applied.
    /// The session keeps its posts and selection; the load state returns to
    /// that of the last finished load.
    pub fn unmount(&mut self) {
        if self.loader.cancel() {
            debug!("load cancelled on unmount");
        }
        self.browser.cancel_load();
        while let Some(outcome) = self.loader.try_next() {
            debug!(generation = outcome.generation, "discarding outcome after unmount");
        }
        self.mounted = false;
    }

    fn start_load(&mut self) {
        let generation = self.browser.begin_load();
        self.loader.start(generation, Arc::clone(&self.source));
    }

    fn apply(&mut self, outcome: LoadOutcome) -> bool {
        self.browser.apply_load(outcome.generation, outcome.result)
    }
}
