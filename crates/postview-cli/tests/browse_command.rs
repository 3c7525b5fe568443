use anyhow::Result;
use postview_testing::TestWorld;

#[test]
fn test_browse_requires_terminal() -> Result<()> {
    let world = TestWorld::new().with_url("http://127.0.0.1:9/posts");

    let result = world.run(&["browse"])?;

    assert!(!result.success());
    assert!(result.stderr.contains("needs a terminal"));
    assert!(result.stdout.is_empty());
    Ok(())
}

#[test]
fn test_default_command_is_browse() -> Result<()> {
    let world = TestWorld::new().with_url("http://127.0.0.1:9/posts");

    let result = world.run(&[])?;

    assert!(!result.success());
    assert!(result.stderr.contains("needs a terminal"));
    Ok(())
}
