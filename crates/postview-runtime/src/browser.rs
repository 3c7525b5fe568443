//! List/detail state for the post browser.
//!
//! `PostBrowser` holds the loaded posts, the optional selected post and the
//! state of the most recent load. Rendering code reads it through [`View`];
//! it never mutates posts except through [`PostBrowser::apply_load`].

use chrono::{DateTime, Utc};
use postview_types::{Post, find_post};
use serde::Serialize;
use tracing::{debug, warn};

use crate::Result;

/// Sequence number of an issued load. Only the latest one may update posts.
pub type Generation = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    FetchFailed,
    DecodeFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailure {
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded { count: usize, at: DateTime<Utc> },
    Failed(LoadFailure),
}

/// What the browser currently shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    List { posts: &'a [Post], cursor: usize },
    Detail(&'a Post),
}

#[derive(Debug)]
pub struct PostBrowser {
    posts: Vec<Post>,
    selected: Option<Post>,
    cursor: usize,
    load: LoadState,
    /// State of the last load that finished, restored when one is cancelled
    settled: LoadState,
    generation: Generation,
}

impl Default for PostBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl PostBrowser {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            selected: None,
            cursor: 0,
            load: LoadState::Idle,
            settled: LoadState::Idle,
            generation: 0,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn selected(&self) -> Option<&Post> {
        self.selected.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn view(&self) -> View<'_> {
        match &self.selected {
            Some(post) => View::Detail(post),
            None => View::List {
                posts: &self.posts,
                cursor: self.cursor,
            },
        }
    }

    /// Mark a new load as in flight and return its generation.
    pub fn begin_load(&mut self) -> Generation {
        self.generation += 1;
        self.load = LoadState::Loading;
        debug!(generation = self.generation, "load started");
        self.generation
    }

    /// Apply the outcome of a load.
    ///
    /// Returns `false` when the outcome belongs to a superseded load and was
    /// dropped. A failure keeps the current posts. The selected post is a copy
    /// and survives any replacement of the list.
    pub fn apply_load(&mut self, generation: Generation, result: Result<Vec<Post>>) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                latest = self.generation,
                "ignoring stale load outcome"
            );
            return false;
        }

        match result {
            Ok(posts) => {
                debug!(generation, count = posts.len(), "posts replaced");
                self.load = LoadState::Loaded {
                    count: posts.len(),
                    at: Utc::now(),
                };
                self.posts = posts;
                self.clamp_cursor();
            }
            Err(err) => {
                warn!(generation, error = %err, "load failed");
                self.load = LoadState::Failed(err.failure());
            }
        }
        self.settled = self.load.clone();
        true
    }

    /// Abandon the load in flight. The load state returns to that of the last
    /// finished load, and any outcome still arriving for it is stale.
    pub fn cancel_load(&mut self) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.generation += 1;
        self.load = self.settled.clone();
        debug!(generation = self.generation, "load cancelled");
        true
    }

    /// Switch to the detail view for `post`.
    ///
    /// Posts that are not part of the current list are rejected.
    pub fn select(&mut self, post: &Post) -> bool {
        let Some(found) = find_post(&self.posts, post.id) else {
            debug!(id = %post.id, "rejecting selection of unknown post");
            return false;
        };
        self.selected = Some(found.clone());
        true
    }

    pub fn select_at(&mut self, index: usize) -> bool {
        let Some(post) = self.posts.get(index).cloned() else {
            return false;
        };
        self.cursor = index;
        self.select(&post)
    }

    pub fn select_highlighted(&mut self) -> bool {
        if self.selected.is_some() {
            return false;
        }
        self.select_at(self.cursor)
    }

    /// Return to the list view. No-op when already there.
    pub fn back(&mut self) {
        self.selected = None;
    }

    pub fn move_down(&mut self) {
        if self.selected.is_none() && self.cursor + 1 < self.posts.len() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected.is_none() {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    pub fn move_first(&mut self) {
        if self.selected.is_none() {
            self.cursor = 0;
        }
    }

    pub fn move_last(&mut self) {
        if self.selected.is_none() {
            self.cursor = self.posts.len().saturating_sub(1);
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.posts.len().saturating_sub(1));
    }
}
