use std::time::Duration;

use anyhow::Result;
use postview_runtime::{BrowserSession, FailureKind, LoadState, View};
use postview_testing::StaticSource;
use postview_testing::fixtures::{MISSING_FIELDS, sample_posts};
use postview_types::Post;

fn titles(view: View<'_>) -> Vec<String> {
    match view {
        View::List { posts, .. } => posts.iter().map(|p| p.title.clone()).collect(),
        View::Detail(_) => panic!("expected list view"),
    }
}

#[tokio::test]
async fn test_list_is_empty_before_fetch_resolves() {
    let source = StaticSource::posts(sample_posts()).with_delay(Duration::from_millis(50));
    let mut session = BrowserSession::new(source);

    session.mount();

    assert!(!session.poll());
    assert!(session.browser().is_loading());
    assert!(titles(session.browser().view()).is_empty());
}

#[tokio::test]
async fn test_fetch_populates_list_in_server_order() {
    let mut session = BrowserSession::new(StaticSource::posts(sample_posts()));

    session.mount();
    assert!(session.next_outcome().await);

    assert_eq!(titles(session.browser().view()), vec!["A", "B"]);
    assert!(matches!(
        session.browser().load_state(),
        LoadState::Loaded { count: 2, .. }
    ));
}

#[tokio::test]
async fn test_select_then_back_round_trip() {
    let mut session = BrowserSession::new(StaticSource::posts(sample_posts()));
    session.mount();
    session.next_outcome().await;

    let first = session.browser().posts()[0].clone();
    assert!(session.browser_mut().select(&first));

    let View::Detail(post) = session.browser().view() else {
        panic!("expected detail view");
    };
    assert_eq!((post.title.as_str(), post.body.as_str()), ("A", "a"));

    session.browser_mut().back();
    session.browser_mut().back();
    assert_eq!(titles(session.browser().view()), vec!["A", "B"]);
}

#[tokio::test]
async fn test_mount_fetches_once() {
    let source = StaticSource::posts(sample_posts());
    let probe = source.clone();
    let mut session = BrowserSession::new(source);

    session.mount();
    session.mount();
    session.next_outcome().await;

    assert!(!session.next_outcome().await);
    assert_eq!(probe.fetch_count(), 1);
}

#[tokio::test]
async fn test_refresh_keeps_selected_copy() {
    let mut session = BrowserSession::new(StaticSource::posts(sample_posts()));
    session.mount();
    session.next_outcome().await;
    session.browser_mut().select_at(0);

    session.refresh();
    assert!(session.next_outcome().await);

    assert_eq!(session.browser().selected(), Some(&Post::new(1, "A", "a")));
    assert_eq!(session.browser().generation(), 2);
}

#[tokio::test]
async fn test_refresh_supersedes_in_flight_load() {
    let source = StaticSource::posts(sample_posts()).with_delay(Duration::from_millis(20));
    let probe = source.clone();
    let mut session = BrowserSession::new(source);

    session.mount();
    session.refresh();
    assert!(session.next_outcome().await);

    assert_eq!(probe.fetch_count(), 1);
    assert_eq!(session.browser().posts().len(), 2);
}

#[tokio::test]
async fn test_unmount_cancels_pending_fetch() {
    let source = StaticSource::posts(sample_posts()).with_delay(Duration::from_millis(30));
    let probe = source.clone();
    let mut session = BrowserSession::new(source);

    session.mount();
    session.unmount();
    tokio::time::sleep(Duration::from_millis(80)).await;

    assert!(!session.poll());
    assert!(session.browser().posts().is_empty());
    assert_eq!(session.browser().load_state(), &LoadState::Idle);
    assert_eq!(probe.fetch_count(), 0);
}

#[tokio::test]
async fn test_unmount_during_refresh_keeps_last_load() {
    let source = StaticSource::posts(sample_posts()).with_delay(Duration::from_millis(30));
    let mut session = BrowserSession::new(source);
    session.mount();
    session.next_outcome().await;

    session.refresh();
    assert!(session.browser().is_loading());
    session.unmount();

    assert!(matches!(
        session.browser().load_state(),
        LoadState::Loaded { count: 2, .. }
    ));
    assert!(!session.next_outcome().await);
}

#[tokio::test]
async fn test_panicking_fetch_becomes_failure() {
    let mut session = BrowserSession::new(StaticSource::panicking());
    session.mount();

    let applied = tokio::time::timeout(Duration::from_secs(5), session.next_outcome())
        .await
        .expect("a dead fetch task must not leave the session waiting");

    assert!(applied);
    let LoadState::Failed(failure) = session.browser().load_state() else {
        panic!("expected failure state");
    };
    assert_eq!(failure.kind, FailureKind::FetchFailed);
    assert!(failure.message.contains("memory"));
}

#[tokio::test]
async fn test_panicking_fetch_is_seen_by_poll() {
    let mut session = BrowserSession::new(StaticSource::panicking());
    session.mount();

    let mut changed = false;
    for _ in 0..100 {
        if session.poll() {
            changed = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert!(changed);
    assert!(!session.browser().is_loading());
}

#[tokio::test]
async fn test_drop_cancels_pending_fetch() {
    let source = StaticSource::posts(sample_posts()).with_delay(Duration::from_millis(30));
    let probe = source.clone();

    {
        let mut session = BrowserSession::new(source);
        session.mount();
    }
    tokio::time::sleep(Duration::from_millis(80)).await;

    assert_eq!(probe.fetch_count(), 0);
}

#[tokio::test]
async fn test_fetch_failure_is_visible() -> Result<()> {
    let mut session = BrowserSession::new(StaticSource::unreachable("connection refused"));
    session.mount();
    session.next_outcome().await;

    let LoadState::Failed(failure) = session.browser().load_state() else {
        panic!("expected failure state");
    };
    assert_eq!(failure.kind, FailureKind::FetchFailed);
    assert!(session.browser().posts().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_decode_failure_is_visible() {
    let mut session = BrowserSession::new(StaticSource::payload(MISSING_FIELDS));
    session.mount();
    session.next_outcome().await;

    let LoadState::Failed(failure) = session.browser().load_state() else {
        panic!("expected failure state");
    };
    assert_eq!(failure.kind, FailureKind::DecodeFailed);
}
