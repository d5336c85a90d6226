use crate::core::error::{ConfigError, WptError, WptResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use wpt::header::ProjectType;
use wpt::i18n::{FunctionRule, ParamRole, RuleSet};

/// Configuration for wpt
/// Searched in order: wpt.toml, .wpt.toml, .config/wpt.toml
///
/// ```toml
/// type = "plugin"
///
/// [files]
/// main = "my-plugin.php"
/// src = ["**/*.php"]
///
/// [i18n]
/// domain = "my-plugin"
///
/// [i18n.functions]
/// my_translate = ["text"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WptConfig {
  /// Plugin or theme; guessed from `style.css` when absent
  #[serde(default, rename = "type")]
  pub project_type: Option<ProjectType>,
  #[serde(default)]
  pub files: FilesConfig,
  #[serde(default)]
  pub i18n: I18nConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
  /// Main plugin file or theme stylesheet (default: `<dirname>.php` or `style.css`)
  #[serde(default)]
  pub main: Option<PathBuf>,

  /// Glob patterns of PHP sources checked by validate-i18n
  #[serde(default = "default_src")]
  pub src: Vec<String>,

  /// Glob patterns excluded from `src`
  #[serde(default = "default_exclude")]
  pub exclude: Vec<String>,
}

fn default_src() -> Vec<String> {
  vec!["**/*.php".to_string()]
}

fn default_exclude() -> Vec<String> {
  ["node_modules/**", "vendor/**", "tests/**", "test/**", "build/**", "tmp/**"]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for FilesConfig {
  fn default() -> Self {
    Self {
      main: None,
      src: default_src(),
      exclude: default_exclude(),
    }
  }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct I18nConfig {
  /// Expected textdomain; falls back to the main file's `Text Domain`
  #[serde(default)]
  pub domain: Option<String>,

  /// Extra gettext-like functions: name -> argument roles before the domain
  #[serde(default)]
  pub functions: BTreeMap<String, Vec<ParamRole>>,
}

impl WptConfig {
  /// Find config file in search order: wpt.toml, .wpt.toml, .config/wpt.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = [
      path.join("wpt.toml"),
      path.join(".wpt.toml"),
      path.join(".config").join("wpt.toml"),
    ];

    candidates.into_iter().find(|p| p.is_file())
  }

  /// Load config, preferring an explicit path over the search order
  ///
  /// A missing config is not an error unless it was requested explicitly.
  pub fn load(root: &Path, explicit: Option<&Path>) -> WptResult<Self> {
    let config_path = match explicit {
      Some(path) if !path.is_file() => {
        return Err(WptError::Config(ConfigError::NotFound {
          path: path.to_path_buf(),
        }));
      }
      Some(path) => path.to_path_buf(),
      None => match Self::find_config_path(root) {
        Some(path) => path,
        None => {
          tracing::debug!(root = %root.display(), "no config file, using defaults");
          return Ok(Self::default());
        }
      },
    };

    tracing::debug!(path = %config_path.display(), "loading config");
    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config = Self::parse(&content, &config_path)?;
    config.validate()?;
    Ok(config)
  }

  fn parse(content: &str, path: &Path) -> WptResult<Self> {
    toml_edit::de::from_str(content).map_err(|e| {
      WptError::Config(ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
      })
    })
  }

  /// Validate field values that serde cannot check
  pub fn validate(&self) -> WptResult<()> {
    if let Some(domain) = &self.i18n.domain
      && domain.trim().is_empty()
    {
      return Err(invalid("i18n.domain", "must not be empty"));
    }

    for name in self.i18n.functions.keys() {
      let valid = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '\\');
      if !valid {
        return Err(invalid(
          &format!("i18n.functions.{}", name),
          "function names may only contain letters, digits, `_` and `\\`",
        ));
      }
    }

    for pattern in self.files.src.iter().chain(&self.files.exclude) {
      glob::Pattern::new(pattern).map_err(|e| invalid("files.src", &format!("'{}': {}", pattern, e)))?;
    }

    Ok(())
  }

  /// Project type from config, else guessed from the directory
  pub fn project_type(&self, root: &Path) -> ProjectType {
    self.project_type.unwrap_or_else(|| ProjectType::guess(root))
  }

  /// Main file from config, else the conventional one for `project_type`
  pub fn main_file(&self, root: &Path, project_type: ProjectType) -> PathBuf {
    match &self.files.main {
      Some(main) => root.join(main),
      None => project_type.main_file(root),
    }
  }

  /// Default WordPress functions plus `[i18n.functions]`
  pub fn rules(&self) -> RuleSet {
    let mut rules = RuleSet::default();
    for (name, params) in &self.i18n.functions {
      rules.insert(name.clone(), FunctionRule::new(params.clone()));
    }
    rules
  }
}

fn invalid(field: &str, reason: &str) -> WptError {
  WptError::Config(ConfigError::InvalidField {
    field: field.to_string(),
    reason: reason.to_string(),
  })
}
