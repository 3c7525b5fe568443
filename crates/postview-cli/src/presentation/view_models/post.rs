use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct PostSummaryViewModel {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostListViewModel {
    pub source: String,
    pub total: usize,
    pub posts: Vec<PostSummaryViewModel>,
}

impl fmt::Display for PostListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id_width = self
            .posts
            .iter()
            .map(|post| post.id.to_string().len())
            .max()
            .unwrap_or(1);

        for post in &self.posts {
            writeln!(f, "{:>width$}  {}", post.id, post.title, width = id_width)?;
        }

        let hidden = self.total.saturating_sub(self.posts.len());
        if hidden > 0 {
            writeln!(f, "... {} more", hidden)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostDetailViewModel {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub title: String,
    pub body: String,
}

impl fmt::Display for PostDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        match self.user_id {
            Some(user_id) => writeln!(f, "post {} by user {}", self.id, user_id)?,
            None => writeln!(f, "post {}", self.id)?,
        }
        writeln!(f)?;
        writeln!(f, "{}", self.body)
    }
}
