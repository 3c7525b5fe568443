//! In-memory post source for driving sessions without a network.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use postview_runtime::{Error, PostSource, Result};
use postview_types::{Post, decode_posts};

#[derive(Debug, Clone)]
enum Outcome {
    Posts(Vec<Post>),
    Payload(String),
    Unreachable(String),
    Panic,
}

/// Source with a fixed outcome, an optional delay and a fetch counter.
///
/// Clones share the counter, so a clone kept by the test observes fetches
/// made by the session that owns the original.
#[derive(Debug, Clone)]
pub struct StaticSource {
    outcome: Outcome,
    delay: Option<Duration>,
    fetches: Arc<AtomicUsize>,
}

impl StaticSource {
    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            delay: None,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn posts(posts: Vec<Post>) -> Self {
        Self::with_outcome(Outcome::Posts(posts))
    }

    /// Serve a raw response body, decoded like a remote payload
    pub fn payload(body: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Payload(body.into()))
    }

    /// Fail every fetch at the transport level
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Unreachable(reason.into()))
    }

    /// Panic inside every fetch
    pub fn panicking() -> Self {
        Self::with_outcome(Outcome::Panic)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of fetches that got past the delay
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl PostSource for StaticSource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn fetch(&self) -> Result<Vec<Post>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.fetches.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            Outcome::Posts(posts) => Ok(posts.clone()),
            Outcome::Payload(body) => {
                decode_posts(body.as_bytes()).map_err(|error| Error::DecodeFailed {
                    origin: self.describe(),
                    error,
                })
            }
            Outcome::Unreachable(reason) => Err(Error::FetchFailed {
                origin: self.describe(),
                reason: reason.clone(),
            }),
            Outcome::Panic => panic!("static source configured to panic"),
        }
    }
}
