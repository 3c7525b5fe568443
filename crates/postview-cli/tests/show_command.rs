use anyhow::Result;
use assert_cmd::Command;
use postview_testing::fixtures::{placeholder_posts, posts_json, sample_posts};
use postview_testing::{FixtureServer, TestWorld};
use predicates::prelude::*;

#[test]
fn test_show_prints_detail() -> Result<()> {
    let server = FixtureServer::json(posts_json(&placeholder_posts(12)))?;
    let world = TestWorld::new().with_url(server.url());

    let result = world.run(&["show", "11"])?;

    assert!(result.success(), "stderr: {}", result.stderr);
    assert_eq!(
        result.stdout,
        "post title 11\npost 11 by user 2\n\nbody of post 11\nsecond line\n"
    );
    Ok(())
}

#[test]
fn test_show_json() -> Result<()> {
    let server = FixtureServer::json(posts_json(&sample_posts()))?;
    let world = TestWorld::new().with_url(server.url());

    let result = world.run(&["show", "2", "--format", "json"])?;

    assert!(result.success());
    let json = result.json()?;
    assert_eq!(json["content"]["id"], 2);
    assert_eq!(json["content"]["title"], "B");
    assert_eq!(json["content"]["body"], "b");
    assert!(json["content"].get("user_id").is_none());
    Ok(())
}

#[test]
#[allow(deprecated)]
fn test_show_unknown_id_fails() -> Result<()> {
    let server = FixtureServer::json(posts_json(&sample_posts()))?;
    let world = TestWorld::new().with_url(server.url());

    let mut cmd = Command::cargo_bin("postview")?;
    world.configure_command(&mut cmd);
    cmd.args(["show", "99"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Post 99 not found"));
    Ok(())
}

#[test]
#[allow(deprecated)]
fn test_show_rejects_non_numeric_id() -> Result<()> {
    let world = TestWorld::new();

    let mut cmd = Command::cargo_bin("postview")?;
    world.configure_command(&mut cmd);
    cmd.args(["show", "abc"]).assert().failure();
    Ok(())
}
