use anyhow::Result;
use postview_testing::TestWorld;

#[test]
fn test_config_show_defaults() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "show", "--format", "json"])?;

    assert!(result.success(), "stderr: {}", result.stderr);
    let json = result.json()?;
    assert_eq!(json["content"]["exists"], false);
    assert_eq!(
        json["content"]["url"],
        "https://jsonplaceholder.typicode.com/posts"
    );
    assert_eq!(json["content"]["timeout_secs"], 10);
    assert_eq!(json["suggestions"][0]["command"], "postview config init");
    Ok(())
}

#[test]
fn test_config_show_applies_flags() -> Result<()> {
    let world = TestWorld::new().with_url("http://localhost:9/posts");

    let result = world.run(&["config", "show", "--timeout", "3"])?;

    assert!(result.success());
    assert!(result.stdout.contains("url:     http://localhost:9/posts"));
    assert!(result.stdout.contains("timeout: 3s"));
    Ok(())
}

#[test]
fn test_config_init_writes_defaults_once() -> Result<()> {
    let world = TestWorld::new();

    let first = world.run(&["config", "init"])?;
    assert!(first.success(), "stderr: {}", first.stderr);
    assert!(first.stdout.contains("Config written"));

    let written = std::fs::read_to_string(world.config_path())?;
    assert!(written.contains("[source]"));
    assert!(written.contains("timeout_secs = 10"));

    std::fs::write(
        world.config_path(),
        "[source]\nurl = \"http://example.test/posts\"\ntimeout_secs = 4\n",
    )?;
    let second = world.run(&["config", "init"])?;
    assert!(second.success());
    assert!(second.stdout.contains("Config already exists"));
    assert!(std::fs::read_to_string(world.config_path())?.contains("example.test"));

    let forced = world.run(&["config", "init", "--force"])?;
    assert!(forced.success());
    assert!(!std::fs::read_to_string(world.config_path())?.contains("example.test"));
    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let world = TestWorld::new();
    std::fs::create_dir_all(world.config_path().parent().unwrap())?;
    std::fs::write(world.config_path(), "[source]\ntimeout_secs = 0\n")?;

    let result = world.run(&["config", "show"])?;

    assert!(!result.success());
    assert!(result.stderr.contains("Configuration error"));
    Ok(())
}

#[test]
#[allow(deprecated)]
fn test_config_path_from_environment() -> Result<()> {
    let world = TestWorld::new();
    let env_path = world.temp_dir().join("from-env.toml");
    std::fs::write(&env_path, "[source]\nurl = \"http://env.test/posts\"\n")?;

    let mut cmd = assert_cmd::Command::cargo_bin("postview")?;
    cmd.env("POSTVIEW_CONFIG", &env_path)
        .current_dir(world.temp_dir())
        .args(["config", "show"]);
    let output = cmd.output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("http://env.test/posts"));
    Ok(())
}
