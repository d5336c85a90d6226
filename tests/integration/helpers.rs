//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Directory holding the readme and PHP fixtures
pub fn fixtures_dir() -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn fixture(name: &str) -> Result<String> {
  let path = fixtures_dir().join(name);
  std::fs::read_to_string(&path).with_context(|| format!("Failed to read fixture {}", path.display()))
}

/// A throwaway plugin directory named `example`, so `example.php` is its main file
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestProject {
  /// Empty project directory
  pub fn empty() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().join("example");
    std::fs::create_dir_all(&path)?;
    Ok(Self { _root: root, path })
  }

  /// Project with the example plugin, its readme.txt and a file with i18n mistakes
  pub fn plugin() -> Result<Self> {
    let project = Self::empty()?;
    for name in ["example.php", "readme.txt", "bad-i18n.php"] {
      project.write_file(name, &fixture(&format!("plugin/{}", name))?)?;
    }
    Ok(project)
  }

  pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
    let target = self.path.join(path);
    if let Some(parent) = target.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(target, content)?;
    Ok(())
  }

  pub fn remove_file(&self, path: &str) -> Result<()> {
    std::fs::remove_file(self.path.join(path))?;
    Ok(())
  }

  /// Check if a file exists
  pub fn file_exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }

  /// Read a file
  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }
}

/// Run wpt and return its output whatever the exit status
pub fn wpt(cwd: &Path, args: &[&str]) -> Result<Output> {
  Command::new(env!("CARGO_BIN_EXE_wpt"))
    .current_dir(cwd)
    .args(args)
    .env_remove("WPT_LOG")
    .output()
    .context("Failed to run wpt")
}

/// Run wpt and fail unless it exits successfully
pub fn run_wpt(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = wpt(cwd, args)?;

  if !output.status.success() {
    anyhow::bail!(
      "wpt command failed: wpt {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout(&output),
      stderr(&output)
    );
  }

  Ok(output)
}

pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).into_owned()
}
