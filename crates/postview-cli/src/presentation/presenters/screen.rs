use postview_runtime::{LoadState, PostBrowser, View};

use crate::presentation::formatters::{first_line, format_clock};
use crate::presentation::view_models::{
    ListItemViewModel, ScreenBody, ScreenViewModel, StatusLevel, StatusLineViewModel,
};

pub const HEADER: &str = "Posts";

/// Build the interactive screen from browser state.
///
/// The frame depends on nothing but `browser` and `source`: the list when no
/// post is selected, the selected post otherwise.
pub fn build_screen(browser: &PostBrowser, source: &str) -> ScreenViewModel {
    let body = match browser.view() {
        View::List { posts, cursor } => ScreenBody::List {
            items: posts
                .iter()
                .enumerate()
                .map(|(index, post)| ListItemViewModel {
                    id: post.id.get(),
                    title: first_line(&post.title).to_string(),
                    highlighted: index == cursor,
                })
                .collect(),
            cursor,
        },
        View::Detail(post) => ScreenBody::Detail {
            id: post.id.get(),
            title: post.title.clone(),
            body: post.body.clone(),
        },
    };

    ScreenViewModel {
        header: HEADER.to_string(),
        source: source.to_string(),
        body,
        status: build_status(browser.load_state(), source),
    }
}

fn build_status(state: &LoadState, source: &str) -> StatusLineViewModel {
    let (level, message, loading) = match state {
        LoadState::Idle => (StatusLevel::Info, "Waiting to load posts".to_string(), false),
        LoadState::Loading => (
            StatusLevel::Info,
            format!("Loading posts from {}...", source),
            true,
        ),
        LoadState::Loaded { count: 0, .. } => {
            (StatusLevel::Warning, "No posts returned".to_string(), false)
        }
        LoadState::Loaded { count, at } => (
            StatusLevel::Success,
            format!("{} posts loaded at {}", count, format_clock(*at)),
            false,
        ),
        LoadState::Failed(failure) => (
            StatusLevel::Error,
            format!("{} (press r to retry)", failure.message),
            false,
        ),
    };

    StatusLineViewModel {
        level,
        message,
        loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postview_types::Post;

    fn loaded(posts: Vec<Post>) -> PostBrowser {
        let mut browser = PostBrowser::new();
        let generation = browser.begin_load();
        browser.apply_load(generation, Ok(posts));
        browser
    }

    fn two_posts() -> Vec<Post> {
        vec![Post::new(1, "A", "a"), Post::new(2, "B", "b")]
    }

    #[test]
    fn test_empty_list_before_load() {
        let mut browser = PostBrowser::new();
        browser.begin_load();

        let screen = build_screen(&browser, "memory");

        assert_eq!(
            screen.body,
            ScreenBody::List {
                items: Vec::new(),
                cursor: 0
            }
        );
        assert!(screen.status.loading);
        assert_eq!(screen.status.message, "Loading posts from memory...");
    }

    #[test]
    fn test_list_after_load() {
        let screen = build_screen(&loaded(two_posts()), "memory");

        insta::assert_json_snapshot!(screen.body, @r#"
        {
          "kind": "list",
          "items": [
            {
              "id": 1,
              "title": "A",
              "highlighted": true
            },
            {
              "id": 2,
              "title": "B",
              "highlighted": false
            }
          ],
          "cursor": 0
        }
        "#);
        assert_eq!(screen.header, "Posts");
        assert_eq!(screen.status.level, StatusLevel::Success);
    }

    #[test]
    fn test_detail_after_select() {
        let mut browser = loaded(two_posts());
        browser.select(&Post::new(1, "A", "a"));

        let screen = build_screen(&browser, "memory");

        insta::assert_json_snapshot!(screen.body, @r#"
        {
          "kind": "detail",
          "id": 1,
          "title": "A",
          "body": "a"
        }
        "#);
    }

    #[test]
    fn test_back_restores_list_in_order() {
        let mut browser = loaded(two_posts());
        browser.select_at(1);
        browser.back();

        let ScreenBody::List { items, cursor } = build_screen(&browser, "memory").body else {
            panic!("expected list");
        };
        let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(cursor, 1);
        assert!(items[1].highlighted);
    }

    #[test]
    fn test_detail_is_unchanged_by_refresh() {
        let mut browser = loaded(two_posts());
        browser.select_at(0);
        let before = build_screen(&browser, "memory").body;

        let generation = browser.begin_load();
        browser.apply_load(generation, Ok(vec![Post::new(1, "new", "new")]));

        assert_eq!(build_screen(&browser, "memory").body, before);
    }

    #[test]
    fn test_failure_status() {
        let mut browser = PostBrowser::new();
        let generation = browser.begin_load();
        browser.apply_load(
            generation,
            Err(postview_runtime::Error::FetchFailed {
                origin: "memory".to_string(),
                reason: "offline".to_string(),
            }),
        );

        let status = build_screen(&browser, "memory").status;

        assert_eq!(status.level, StatusLevel::Error);
        assert_eq!(
            status.message,
            "Failed to fetch posts from memory: offline (press r to retry)"
        );
    }

    #[test]
    fn test_empty_collection_warns() {
        let status = build_screen(&loaded(Vec::new()), "memory").status;
        assert_eq!(status.level, StatusLevel::Warning);
    }
}
