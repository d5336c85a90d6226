//! Project context - build once in main, pass to every command
//!
//! ```text
//! main.rs:
//!   ProjectContext::build() -> &ProjectContext
//!   |
//!   v
//! commands/readme.rs, i18n.rs, bump.rs, info.rs:
//!   fn run_*(ctx: &ProjectContext, ...)
//! ```

use crate::core::config::WptConfig;
use crate::core::error::{ConfigError, ResultExt, WptError, WptResult};
use crate::utils::{dir_name, first_existing};
use std::fs;
use std::path::{Path, PathBuf};
use wpt::header::{FileHeader, ProjectType};
use wpt::readme::{Document, README_CANDIDATES};

/// Project root plus loaded configuration
#[derive(Debug, Clone)]
pub struct ProjectContext {
  /// Project root directory (the working directory)
  pub root: PathBuf,

  /// wpt.toml, or defaults when there is none
  pub config: WptConfig,
}

impl ProjectContext {
  pub fn build(root: &Path, config_path: Option<&Path>) -> WptResult<Self> {
    let config = WptConfig::load(root, config_path)?;
    Ok(Self {
      root: root.to_path_buf(),
      config,
    })
  }

  /// CLI override, then config, then guessed from the directory
  pub fn project_type(&self, cli: Option<ProjectType>) -> ProjectType {
    cli.unwrap_or_else(|| self.config.project_type(&self.root))
  }

  /// Main file from `--file`, `files.main` or convention; it must exist
  pub fn main_file(&self, cli: Option<&Path>, project_type: ProjectType) -> WptResult<PathBuf> {
    let path = match cli {
      Some(file) => self.root.join(file),
      None => self.config.main_file(&self.root, project_type),
    };

    if !path.is_file() {
      return Err(WptError::Config(ConfigError::MainFileNotFound { path }));
    }
    Ok(path)
  }

  /// Main file path and its content
  pub fn read_main(&self, cli_file: Option<&Path>, project_type: ProjectType) -> WptResult<(PathBuf, String)> {
    let path = self.main_file(cli_file, project_type)?;
    let content = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok((path, String::from_utf8_lossy(&content).into_owned()))
  }

  /// Parse the main file header for `project_type`
  pub fn read_header(&self, cli_file: Option<&Path>, project_type: ProjectType) -> WptResult<(PathBuf, FileHeader)> {
    let (path, content) = self.read_main(cli_file, project_type)?;
    tracing::debug!(file = %path.display(), %project_type, "parsing header");
    Ok((path, FileHeader::parse(&content, project_type)))
  }

  /// Explicit version, else the main file's `Version` header
  pub fn expected_version(&self, cli: Option<String>, cli_file: Option<&Path>) -> WptResult<String> {
    if let Some(version) = cli {
      return Ok(version);
    }

    let project_type = self.project_type(None);
    let (path, header) = self.read_header(cli_file, project_type)?;
    header.version().map(str::to_string).ok_or_else(|| {
      WptError::with_help(
        format!("No Version header in {}", path.display()),
        "Pass the version explicitly or add `Version:` to the main file header.",
      )
    })
  }

  /// Textdomain: CLI, then `i18n.domain`, then `Text Domain` header, then dir name
  pub fn text_domain(&self, cli: Option<String>, cli_file: Option<&Path>) -> String {
    if let Some(domain) = cli.or_else(|| self.config.i18n.domain.clone()) {
      return domain;
    }

    let project_type = self.project_type(None);
    match self.read_header(cli_file, project_type) {
      Ok((_, header)) => match header.text_domain() {
        Some(domain) => domain.to_string(),
        None => dir_name(&self.root),
      },
      Err(e) => {
        tracing::debug!(error = %e, "no readable main file, using directory name as domain");
        dir_name(&self.root)
      }
    }
  }

  pub fn readme_path(&self) -> WptResult<PathBuf> {
    first_existing(&self.root, &README_CANDIDATES).ok_or_else(|| {
      WptError::with_help(
        format!("No readme.txt found in {}", self.root.display()),
        "Run wpt from the plugin or theme root directory.",
      )
    })
  }

  /// Raw readme.txt content and its path
  pub fn read_readme(&self) -> WptResult<(PathBuf, String)> {
    let path = self.readme_path()?;
    let content = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok((path, content))
  }

  pub fn parse_readme(&self) -> WptResult<(PathBuf, Document)> {
    let (path, content) = self.read_readme()?;
    let doc = wpt::readme::parse(&content)?;
    tracing::debug!(file = %path.display(), sections = doc.sections.len(), "parsed readme");
    Ok((path, doc))
  }
}
