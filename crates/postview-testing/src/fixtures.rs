//! Sample posts and their wire encodings.

use anyhow::Result;
use postview_types::Post;
use std::path::{Path, PathBuf};

/// The two-post collection used throughout the tests
pub fn sample_posts() -> Vec<Post> {
    vec![Post::new(1, "A", "a"), Post::new(2, "B", "b")]
}

/// A longer collection shaped like the public placeholder API
pub fn placeholder_posts(count: u64) -> Vec<Post> {
    (1..=count)
        .map(|id| {
            Post::new(
                id,
                format!("post title {}", id),
                format!("body of post {}\nsecond line", id),
            )
            .with_user((id - 1) / 10 + 1)
        })
        .collect()
}

/// Encode posts the way the remote API does
pub fn posts_json(posts: &[Post]) -> String {
    serde_json::to_string(posts).expect("posts always serialize")
}

/// Write posts to `dir/name` and return the path
pub fn write_posts_file(dir: &Path, name: &str, posts: &[Post]) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, posts_json(posts))?;
    Ok(path)
}

/// A body that is valid JSON but not a post collection
pub const NOT_A_COLLECTION: &str = r#"{"error": "not a list"}"#;

/// An array whose records lack the required `body` field
pub const MISSING_FIELDS: &str = r#"[{"id": 1, "title": "A"}]"#;
