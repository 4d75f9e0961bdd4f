use std::fs;

use anyhow::Result;
use tempfile::TempDir;

use algorun::handlers::run::RunHandler;
use algorun::script::{self, ScriptHost};

#[tokio::test]
async fn run_handler_swallows_cycle_failures() -> Result<()> {
    let dir = TempDir::new()?;

    // Failures are rendered as notifications, never returned to the caller.
    RunHandler::run(Some("missingOne"), dir.path(), true, false).await?;
    RunHandler::run(None, dir.path(), true, false).await?;
    Ok(())
}

#[tokio::test]
async fn run_handler_runs_a_script() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("greet.rhai"), r#"fn greet() { "hi" }"#)?;

    RunHandler::run(Some("greet"), dir.path(), true, false).await?;
    Ok(())
}

#[test]
fn discover_lists_sorted_script_stems() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("zeta.rhai"), "fn zeta() { 0 }")?;
    fs::write(dir.path().join("alpha.rhai"), "fn alpha() { 0 }")?;
    fs::write(dir.path().join("notes.txt"), "not a script")?;

    assert_eq!(script::discover(dir.path())?, vec!["alpha", "zeta"]);

    // A missing directory lists as empty
    assert!(script::discover(&dir.path().join("nope"))?.is_empty());
    Ok(())
}

#[test]
fn host_registry_marks_loads_only_on_success() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("good.rhai"), "fn good() { 1 }")?;
    let mut host = ScriptHost::new(dir.path());

    assert!(!host.is_loaded("good"));
    host.load("good").unwrap();
    assert!(host.is_loaded("good"));

    assert!(host.load("absent").is_err());
    assert!(!host.is_loaded("absent"));
    Ok(())
}
