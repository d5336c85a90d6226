//! Tests for the `readme` commands

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_parse_json_valid_readme() -> Result<()> {
  let project = TestProject::empty()?;
  project.write_file("readme.txt", &fixture("readme-valid.txt")?)?;

  let output = run_wpt(&project.path, &["readme", "parse", "--json"])?;
  let doc: serde_json::Value = serde_json::from_str(&stdout(&output))?;

  assert_eq!(doc["title"], "Plugin Name");
  assert_eq!(
    doc["description"],
    "Here is a short description of the plugin.  This should be no more than 150 characters.  No markup here."
  );
  assert_eq!(doc["meta"]["Contributors"], serde_json::json!(["akeda", "automattic"]));
  assert_eq!(doc["meta"]["Donate link"], "http://example.com/");
  assert_eq!(doc["meta"]["Stable tag"], "4.3");

  let sections = doc["sections"].as_array().expect("sections array");
  assert_eq!(sections.len(), 8);
  assert_eq!(sections[2]["heading"], "Frequently Asked Questions");
  assert!(sections[2]["body"].is_null());
  assert_eq!(sections[2]["subsections"][1]["heading"], "What about foo bar?");
  assert_eq!(sections[4]["subsections"][0]["heading"], "1.0");

  Ok(())
}

#[test]
fn test_parse_summary() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = run_wpt(&project.path, &["readme", "parse"])?;
  let out = stdout(&output);

  assert!(out.contains("📦 Example"));
  assert!(out.contains("== Changelog == (1 entries)"));
  assert!(out.contains("readme.txt parsed"));
  Ok(())
}

#[test]
fn test_structural_errors_exit_with_user_error() -> Result<()> {
  let cases = [
    ("readme-missing-plugin-name.txt", "Malformed metadata block"),
    ("readme-missing-meta.txt", "Parse error meta block"),
    ("readme-missing-section.txt", "Failed to parse sections"),
  ];

  for (fixture_name, message) in cases {
    let project = TestProject::empty()?;
    project.write_file("readme.txt", &fixture(fixture_name)?)?;

    let output = wpt(&project.path, &["readme", "parse"])?;
    assert_eq!(output.status.code(), Some(1), "{}", fixture_name);
    assert!(stderr(&output).contains(message), "{}: {}", fixture_name, stderr(&output));
  }
  Ok(())
}

#[test]
fn test_missing_readme() -> Result<()> {
  let project = TestProject::empty()?;
  let output = wpt(&project.path, &["readme", "parse"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("No readme.txt found"));
  Ok(())
}

#[test]
fn test_uppercase_readme_name() -> Result<()> {
  let project = TestProject::plugin()?;
  let readme = project.read_file("readme.txt")?;
  project.remove_file("readme.txt")?;
  project.write_file("README.txt", &readme)?;

  run_wpt(&project.path, &["readme", "parse"])?;
  Ok(())
}

#[test]
fn test_changelog_defaults_to_main_file_version() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = run_wpt(&project.path, &["readme", "changelog"])?;
  assert_eq!(stdout(&output).trim(), "* Initial release.");
  Ok(())
}

#[test]
fn test_changelog_mismatch_is_validation_failure() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = wpt(&project.path, &["readme", "changelog", "0.2.0"])?;

  assert_eq!(output.status.code(), Some(3));
  assert!(stderr(&output).contains("Missing changelog for 0.2.0 in readme.txt"));
  Ok(())
}

#[test]
fn test_check_version_match() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = run_wpt(&project.path, &["readme", "check-version"])?;
  assert!(stdout(&output).contains("Stable tag matches version 0.1.0."));
  Ok(())
}

#[test]
fn test_check_version_mismatch() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = wpt(&project.path, &["readme", "check-version", "0.2.0"])?;

  assert_eq!(output.status.code(), Some(3));
  assert!(stderr(&output).contains("Version in main file (0.2.0) does not match with stable tag in readme.txt (0.1.0)."));
  Ok(())
}

#[test]
fn test_check_version_trunk_warns() -> Result<()> {
  let project = TestProject::plugin()?;
  let readme = project.read_file("readme.txt")?.replace("Stable tag: 0.1.0", "Stable tag: trunk");
  project.write_file("readme.txt", &readme)?;

  let output = run_wpt(&project.path, &["readme", "check-version"])?;
  assert!(stdout(&output).contains("Stable tag in readme.txt is trunk"));
  Ok(())
}

#[test]
fn test_markdown_writes_readme_md() -> Result<()> {
  let project = TestProject::plugin()?;
  run_wpt(&project.path, &["readme", "markdown"])?;

  assert!(project.file_exists("README.md"));
  let markdown = project.read_file("README.md")?;
  assert!(markdown.starts_with("<!-- DO NOT EDIT"));
  assert!(markdown.contains("# Example #"));
  assert!(markdown.contains("**Contributors:** [akeda](https://profiles.wordpress.org/akeda)  \n"));
  assert!(markdown.contains("## Changelog ##"));
  assert!(markdown.contains("### 0.1.0 ###\n* Initial release."));
  Ok(())
}

#[test]
fn test_markdown_to_stdout() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = run_wpt(&project.path, &["readme", "markdown", "--stdout"])?;

  assert!(stdout(&output).contains("# Example #"));
  assert!(!project.file_exists("README.md"));
  Ok(())
}
