//! Tests for the `validate-i18n` command

use crate::helpers::*;
use anyhow::Result;

fn diagnostic(line: usize, message: &str) -> String {
  format!("{:<10} {}", format!("L{}", line), message)
}

#[test]
fn test_clean_file_passes() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = run_wpt(&project.path, &["validate-i18n", "example.php"])?;
  assert!(stdout(&output).contains("No i18n errors in 1 file(s) for textdomain 'example'."));
  Ok(())
}

#[test]
fn test_bad_file_reports_each_call() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = wpt(&project.path, &["validate-i18n", "bad-i18n.php"])?;
  let out = stdout(&output);

  assert_eq!(output.status.code(), Some(3));
  assert!(out.contains("bad-i18n.php\n------------\n"));
  assert!(out.contains(&diagnostic(6, "Missing textdomain 'example' as arg #2 in function __()")));
  assert!(out.contains(&diagnostic(7, "Argument #1 in function _e() must be in literal string")));
  assert!(out.contains(&diagnostic(8, "Missing textdomain 'example' as arg #2 in function esc_html__()")));
  assert!(out.contains(&diagnostic(10, "Argument #2 in function _x() must be in literal string")));
  // `$count` in _n() is the plural count and allowed
  assert!(!out.contains("function _n()"));
  assert!(stderr(&output).contains("Found 4 i18n error(s) in 1 file(s)."));
  Ok(())
}

#[test]
fn test_discovers_php_files() -> Result<()> {
  let project = TestProject::plugin()?;
  project.write_file("inc/admin.php", "<?php\n_e( 'Settings', 'example' );\n")?;

  let output = wpt(&project.path, &["validate-i18n"])?;
  let out = stdout(&output);

  assert_eq!(output.status.code(), Some(3));
  assert!(out.contains("bad-i18n.php"));
  assert!(!out.contains("example.php\n"));
  assert!(!out.contains("inc/admin.php"));
  Ok(())
}

#[test]
fn test_excluded_directories_are_skipped() -> Result<()> {
  let project = TestProject::plugin()?;
  project.remove_file("bad-i18n.php")?;
  project.write_file("vendor/lib/thing.php", "<?php\n__( 'Not ours' );\n")?;
  project.write_file("inc/admin.php", "<?php\n_e( 'Settings', 'example' );\n")?;

  let output = run_wpt(&project.path, &["validate-i18n"])?;
  assert!(stdout(&output).contains("No i18n errors in 2 file(s)"));
  Ok(())
}

#[test]
fn test_domain_override() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = wpt(&project.path, &["validate-i18n", "example.php", "--domain", "other"])?;

  assert_eq!(output.status.code(), Some(3));
  assert!(stdout(&output).contains("Missing textdomain 'other' as arg #2 in function __()"));
  Ok(())
}

#[test]
fn test_domain_falls_back_to_directory_name() -> Result<()> {
  let project = TestProject::empty()?;
  project.write_file("plugin.php", "<?php\n__( 'Hi', 'example' );\n")?;

  // No example.php main file, so the domain is the directory name `example`
  run_wpt(&project.path, &["validate-i18n", "plugin.php"])?;
  Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = wpt(&project.path, &["validate-i18n", "bad-i18n.php", "example.php", "--json"])?;
  assert_eq!(output.status.code(), Some(3));

  let report: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  assert_eq!(report["domain"], "example");
  assert_eq!(report["files_checked"], 2);

  let files = report["files"].as_array().expect("files array");
  assert_eq!(files.len(), 1);
  assert_eq!(files[0]["file"], "bad-i18n.php");
  assert_eq!(files[0]["errors"][0]["line"], 6);
  assert_eq!(files[0]["errors"].as_array().map(Vec::len), Some(4));
  Ok(())
}

#[test]
fn test_config_functions_and_domain() -> Result<()> {
  let project = TestProject::empty()?;
  project.write_file(
    "wpt.toml",
    "[i18n]\ndomain = \"acme\"\n\n[i18n.functions]\nacme_t = [\"text\"]\n",
  )?;
  project.write_file("acme.php", "<?php\nacme_t( 'Hi', 'acme' );\nacme_t( 'Bye' );\n")?;

  let output = wpt(&project.path, &["validate-i18n", "acme.php"])?;
  assert_eq!(output.status.code(), Some(3));
  assert!(stdout(&output).contains(&diagnostic(3, "Missing textdomain 'acme' as arg #2 in function acme_t()")));
  assert!(!stdout(&output).contains("L2 "));
  Ok(())
}

#[test]
fn test_missing_explicit_file() -> Result<()> {
  let project = TestProject::plugin()?;
  let output = wpt(&project.path, &["validate-i18n", "nope.php"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("File nope.php does not exist."));
  Ok(())
}
