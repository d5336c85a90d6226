//! Tests for the `info` command and config loading

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_info_plugin() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = run_wpt(&project.path, &["info"])?;
  let out = stdout(&output);

  assert!(out.starts_with("📦 Example\n"));
  assert!(out.contains("Project Type: Plugin"));
  assert!(out.contains("Plugin Name: Example"));
  assert!(out.contains("Version: 0.1.0"));
  assert!(out.contains("Text Domain: example"));
  assert!(out.contains("Domain Path: /languages/"));
  Ok(())
}

#[test]
fn test_info_json() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = run_wpt(&project.path, &["info", "--json"])?;
  let info: serde_json::Value = serde_json::from_str(&stdout(&output))?;

  assert_eq!(info["Project Type"], "plugin");
  assert_eq!(info["Version"], "0.1.0");
  assert_eq!(info["Network"], "");
  Ok(())
}

#[test]
fn test_info_theme_is_guessed() -> Result<()> {
  let project = TestProject::empty()?;
  project.write_file(
    "style.css",
    "/*\nTheme Name: Twenty Example\nVersion: 1.2\nText Domain: twenty-example\n*/\n",
  )?;

  let output = run_wpt(&project.path, &["info"])?;
  let out = stdout(&output);
  assert!(out.contains("Project Type: Theme"));
  assert!(out.contains("Theme Name: Twenty Example"));
  Ok(())
}

#[test]
fn test_info_explicit_file() -> Result<()> {
  let project = TestProject::empty()?;
  project.write_file("src/main.php", "<?php\n/*\n * Plugin Name: Nested\n */\n")?;

  let output = run_wpt(&project.path, &["info", "--file", "src/main.php"])?;
  assert!(stdout(&output).contains("Plugin Name: Nested"));
  Ok(())
}

#[test]
fn test_info_main_file_from_config() -> Result<()> {
  let project = TestProject::empty()?;
  project.write_file(".wpt.toml", "type = \"plugin\"\n\n[files]\nmain = \"boot.php\"\n")?;
  project.write_file("boot.php", "<?php\n/*\n * Plugin Name: Booted\n */\n")?;

  let output = run_wpt(&project.path, &["info"])?;
  assert!(stdout(&output).contains("Plugin Name: Booted"));
  Ok(())
}

#[test]
fn test_info_missing_main_file() -> Result<()> {
  let project = TestProject::empty()?;
  let output = wpt(&project.path, &["info"])?;

  assert_eq!(output.status.code(), Some(1));
  let err = stderr(&output);
  assert!(err.contains("example.php does not exist."));
  assert!(err.contains("💡 Help:"));
  Ok(())
}

#[test]
fn test_invalid_config_is_user_error() -> Result<()> {
  let project = TestProject::plugin()?;
  project.write_file("wpt.toml", "type = \"module\"\n")?;

  let output = wpt(&project.path, &["info"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("Something wrong when reading"));
  Ok(())
}

#[test]
fn test_explicit_config_must_exist() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = wpt(&project.path, &["--config", "missing.toml", "info"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("missing.toml does not exist."));
  Ok(())
}
