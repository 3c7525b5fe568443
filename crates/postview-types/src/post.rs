use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Result;

/// Server-assigned post identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A single post record as served by the remote collection.
///
/// Records are immutable once received. Fields other than the ones below
/// are ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: PostId::new(id),
            title: title.into(),
            body: body.into(),
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

/// Decode a full response body into posts, preserving server order.
///
/// The payload must be a JSON array whose every element carries at least
/// `id`, `title` and `body`.
pub fn decode_posts(bytes: &[u8]) -> Result<Vec<Post>> {
    let posts: Vec<Post> = serde_json::from_slice(bytes)?;
    Ok(posts)
}

/// Look up a post by id in server order
pub fn find_post(posts: &[Post], id: PostId) -> Option<&Post> {
    posts.iter().find(|post| post.id == id)
}
