//! Tests for `bump wp-version`

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_bump_updates_readme_and_main_file() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = run_wpt(&project.path, &["bump", "wp-version", "4.6", "4.9"])?;

  let readme = project.read_file("readme.txt")?;
  assert!(readme.contains("Requires at least: 4.6\n"));
  assert!(readme.contains("Tested up to: 4.9\n"));

  let main = project.read_file("example.php")?;
  assert!(main.contains(" * Requires at least: 4.6\n"));
  assert!(main.contains(" * Tested up to: 4.9\n"));

  assert!(stdout(&output).contains("Updated Requires at least and Tested up to in readme.txt."));
  Ok(())
}

#[test]
fn test_bump_dry_run_writes_nothing() -> Result<()> {
  let project = TestProject::plugin()?;
  let before = project.read_file("readme.txt")?;

  let output = run_wpt(&project.path, &["bump", "wp-version", "4.6", "4.9", "--dry-run"])?;

  assert_eq!(project.read_file("readme.txt")?, before);
  assert!(project.read_file("example.php")?.contains("Tested up to: 4.7"));
  assert!(stdout(&output).contains("Would update"));
  Ok(())
}

#[test]
fn test_bump_only_changed_line() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = run_wpt(&project.path, &["bump", "wp-version", "4.4.0", "5.0"])?;

  let readme = project.read_file("readme.txt")?;
  assert!(readme.contains("Requires at least: 4.4\n"));
  assert!(readme.contains("Tested up to: 5.0\n"));
  assert!(stdout(&output).contains("Updated Tested up to in readme.txt."));
  Ok(())
}

#[test]
fn test_bump_nothing_to_update() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = run_wpt(&project.path, &["bump", "wp-version", "4.4", "4.7"])?;
  let out = stdout(&output);

  assert!(out.contains("Nothing updated in readme.txt."));
  assert!(out.contains("Nothing updated in example.php."));
  Ok(())
}

#[test]
fn test_bump_rejects_inverted_range() -> Result<()> {
  let project = TestProject::plugin()?;
  let before = project.read_file("readme.txt")?;
  let output = wpt(&project.path, &["bump", "wp-version", "5.0", "4.9"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("Version of <to>, 4.9, must be greater than or equal to <from>, 5.0."));
  assert_eq!(project.read_file("readme.txt")?, before);
  Ok(())
}

#[test]
fn test_bump_rejects_invalid_version() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = wpt(&project.path, &["bump", "wp-version", "latest", "4.9"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("Value <from>, latest, is not a valid version."));
  Ok(())
}

#[test]
fn test_bump_without_main_file_leaves_readme_untouched() -> Result<()> {
  let project = TestProject::plugin()?;
  project.remove_file("example.php")?;
  let before = project.read_file("readme.txt")?;

  let output = wpt(&project.path, &["bump", "wp-version", "4.6", "4.9"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("example.php does not exist."));
  assert!(!stdout(&output).contains("Updated"));
  assert_eq!(project.read_file("readme.txt")?, before);
  Ok(())
}
