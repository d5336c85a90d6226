//! Plugin and theme main-file headers
//!
//! WordPress reads project metadata from a comment block at the top of the
//! plugin's main PHP file or the theme's `style.css`:
//!
//! ```text
//! /**
//!  * Plugin Name: Example
//!  * Version: 0.1.0
//!  * Text Domain: example
//!  */
//! ```

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Only this many leading bytes are searched for headers
pub const HEADER_SCAN_LIMIT: usize = 8192;

pub const PLUGIN_LABELS: &[&str] = &[
  "Plugin Name",
  "Plugin URI",
  "Version",
  "Description",
  "Author",
  "Author URI",
  "Text Domain",
  "Domain Path",
  "Network",
  "License",
  "License URI",
];

pub const THEME_LABELS: &[&str] = &[
  "Theme Name",
  "Theme URI",
  "Version",
  "Description",
  "Author",
  "Author URI",
  "Template",
  "Status",
  "Tags",
  "Text Domain",
  "Domain Path",
  "License",
  "License URI",
];

/// Plugin or theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
  #[default]
  Plugin,
  Theme,
}

impl ProjectType {
  /// A directory with a `style.css` is a theme, anything else a plugin
  pub fn guess(root: &Path) -> Self {
    if root.join("style.css").is_file() {
      ProjectType::Theme
    } else {
      ProjectType::Plugin
    }
  }

  /// Conventional main file: `style.css` or `<dirname>.php`
  pub fn main_file(self, root: &Path) -> PathBuf {
    match self {
      ProjectType::Theme => root.join("style.css"),
      ProjectType::Plugin => {
        let name = root.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        root.join(format!("{}.php", name))
      }
    }
  }

  pub fn labels(self) -> &'static [&'static str] {
    match self {
      ProjectType::Plugin => PLUGIN_LABELS,
      ProjectType::Theme => THEME_LABELS,
    }
  }
}

impl fmt::Display for ProjectType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ProjectType::Plugin => write!(f, "plugin"),
      ProjectType::Theme => write!(f, "theme"),
    }
  }
}

impl FromStr for ProjectType {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "plugin" => Ok(ProjectType::Plugin),
      "theme" => Ok(ProjectType::Theme),
      other => Err(format!("unknown project type '{}' (expected 'plugin' or 'theme')", other)),
    }
  }
}

/// Header values in label order; missing labels hold an empty string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
  pub project_type: ProjectType,
  fields: Vec<(String, String)>,
}

impl FileHeader {
  pub fn parse(content: &str, project_type: ProjectType) -> Self {
    Self::parse_with(content, project_type, &[])
  }

  /// Parse the type's labels plus `extra` ones such as `Requires at least`
  pub fn parse_with(content: &str, project_type: ProjectType, extra: &[&str]) -> Self {
    let head = normalize_newlines(truncate(content, HEADER_SCAN_LIMIT));

    let fields = project_type
      .labels()
      .iter()
      .chain(extra)
      .map(|label| (label.to_string(), find_value(&head, label)))
      .collect();

    Self { project_type, fields }
  }

  /// Value for `label` (case-insensitive), `None` if the label was not requested
  pub fn get(&self, label: &str) -> Option<&str> {
    self
      .fields
      .iter()
      .find(|(l, _)| l.eq_ignore_ascii_case(label))
      .map(|(_, v)| v.as_str())
  }

  pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
    self.fields.iter().map(|(l, v)| (l.as_str(), v.as_str()))
  }

  /// `Plugin Name` or `Theme Name`
  pub fn name(&self) -> &str {
    let label = match self.project_type {
      ProjectType::Plugin => "Plugin Name",
      ProjectType::Theme => "Theme Name",
    };
    self.non_empty(label).unwrap_or_default()
  }

  pub fn version(&self) -> Option<&str> {
    self.non_empty("Version")
  }

  pub fn text_domain(&self) -> Option<&str> {
    self.non_empty("Text Domain")
  }

  fn non_empty(&self, label: &str) -> Option<&str> {
    self.get(label).filter(|v| !v.is_empty())
  }
}

impl Serialize for FileHeader {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
    map.serialize_entry("Project Type", &self.project_type)?;
    for (label, value) in &self.fields {
      map.serialize_entry(label, value)?;
    }
    map.end()
  }
}

fn find_value(head: &str, label: &str) -> String {
  let pattern = format!(r"(?mi)^[ \t/*#@]*{}:(.*)$", regex::escape(label));
  Regex::new(&pattern)
    .ok()
    .and_then(|re| re.captures(head).and_then(|caps| caps.get(1)).map(|m| clean(m.as_str())))
    .unwrap_or_default()
}

/// Drop a trailing comment close or PHP close tag and surrounding space
fn clean(value: &str) -> String {
  let cut = ["*/", "?>"].iter().filter_map(|end| value.find(end)).min();
  match cut {
    Some(idx) => value[..idx].trim().to_string(),
    None => value.trim().to_string(),
  }
}

fn truncate(content: &str, limit: usize) -> &str {
  if content.len() <= limit {
    return content;
  }
  let mut end = limit;
  while !content.is_char_boundary(end) {
    end -= 1;
  }
  &content[..end]
}

fn normalize_newlines(content: &str) -> String {
  content.replace("\r\n", "\n").replace('\r', "\n")
}
