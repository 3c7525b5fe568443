use postview_types::Post;

use crate::presentation::formatters::{first_line, truncate_text};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, PostDetailViewModel, PostListViewModel,
    PostSummaryViewModel, StatusBadge,
};

/// Width of the id column plus separator, reserved when fitting titles
const ID_COLUMN: usize = 6;

pub fn present_post_list(
    posts: &[Post],
    source: &str,
    limit: Option<usize>,
    title_width: Option<usize>,
) -> CommandResultViewModel<PostListViewModel> {
    let shown = limit.unwrap_or(posts.len()).min(posts.len());

    let summaries = posts[..shown]
        .iter()
        .map(|post| {
            let title = first_line(&post.title);
            PostSummaryViewModel {
                id: post.id.get(),
                title: match title_width {
                    Some(width) => truncate_text(title, width.saturating_sub(ID_COLUMN).max(8)),
                    None => title.to_string(),
                },
            }
        })
        .collect();

    let content = PostListViewModel {
        source: source.to_string(),
        total: posts.len(),
        posts: summaries,
    };

    let Some(first) = posts.first() else {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning(format!("No posts from {}", source)));
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(format!(
            "{} posts from {}",
            posts.len(),
            source
        )))
        .with_suggestion(
            Guidance::new("Read a post").with_command(format!("postview show {}", first.id)),
        )
}

pub fn present_post_detail(post: &Post) -> CommandResultViewModel<PostDetailViewModel> {
    CommandResultViewModel::new(PostDetailViewModel {
        id: post.id.get(),
        user_id: post.user_id,
        title: post.title.clone(),
        body: post.body.clone(),
    })
}
