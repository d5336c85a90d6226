//! Parsed `readme.txt` structure

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Meta keys every document carries, in the order they are reported
pub const RECOGNIZED_KEYS: [&str; 7] = [
  "Contributors",
  "Tags",
  "Requires at least",
  "Tested up to",
  "Stable tag",
  "License",
  "License URI",
];

/// A parsed `readme.txt`
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Document {
  /// Plugin name from the `=== Title ===` line
  pub title: String,
  /// Short description following the meta block
  pub description: String,
  pub meta: MetaBlock,
  /// Sections in document order
  pub sections: Vec<Section>,
}

/// `== Heading ==` block
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Section {
  pub heading: String,
  /// Free text before the first subsection; `None` when the section only holds subsections
  pub body: Option<String>,
  pub subsections: Vec<Subsection>,
}

/// `= Heading =` block, e.g. one changelog entry or one FAQ item
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Subsection {
  pub heading: String,
  pub body: String,
}

/// Header lines between the title and the short description
///
/// Keys are matched exactly as written (`Stable tag`, not `Stable Tag`).
/// Unknown keys are kept in [`MetaBlock::extra`] in the order they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaBlock {
  pub contributors: Vec<String>,
  pub tags: Vec<String>,
  pub requires_at_least: Option<String>,
  pub tested_up_to: Option<String>,
  pub stable_tag: Option<String>,
  pub license: Option<String>,
  pub license_uri: Option<String>,
  pub extra: Vec<(String, String)>,
}

/// Borrowed view of a single meta value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaValue<'a> {
  List(&'a [String]),
  Text(&'a str),
}

impl MetaBlock {
  /// Store a `Key: value` pair; a repeated key replaces the earlier value
  pub fn insert(&mut self, key: &str, value: &str) {
    match key {
      "Contributors" => self.contributors = split_list(value),
      "Tags" => self.tags = split_list(value),
      "Requires at least" => self.requires_at_least = Some(value.to_string()),
      "Tested up to" => self.tested_up_to = Some(value.to_string()),
      "Stable tag" => self.stable_tag = Some(value.to_string()),
      "License" => self.license = Some(value.to_string()),
      "License URI" => self.license_uri = Some(value.to_string()),
      _ => {
        if let Some(entry) = self.extra.iter_mut().find(|(k, _)| k == key) {
          entry.1 = value.to_string();
        } else {
          self.extra.push((key.to_string(), value.to_string()));
        }
      }
    }
  }

  /// Look up a scalar value by its readme key
  ///
  /// `Contributors` and `Tags` are lists; use the fields directly.
  pub fn get(&self, key: &str) -> Option<&str> {
    match key {
      "Requires at least" => self.requires_at_least.as_deref(),
      "Tested up to" => self.tested_up_to.as_deref(),
      "Stable tag" => self.stable_tag.as_deref(),
      "License" => self.license.as_deref(),
      "License URI" => self.license_uri.as_deref(),
      _ => self.extra.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str()),
    }
  }

  /// All keys with a value: recognized keys first, then extras in source order
  pub fn entries(&self) -> Vec<(&str, MetaValue<'_>)> {
    let mut entries = Vec::new();
    for key in RECOGNIZED_KEYS {
      let value = match key {
        "Contributors" if !self.contributors.is_empty() => Some(MetaValue::List(&self.contributors)),
        "Tags" if !self.tags.is_empty() => Some(MetaValue::List(&self.tags)),
        _ => self.get(key).map(MetaValue::Text),
      };
      if let Some(value) = value {
        entries.push((key, value));
      }
    }
    entries.extend(self.extra.iter().map(|(k, v)| (k.as_str(), MetaValue::Text(v.as_str()))));
    entries
  }
}

fn split_list(value: &str) -> Vec<String> {
  value
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(String::from)
    .collect()
}

// Recognized scalar keys are always present (null when absent), lists default to [].
impl Serialize for MetaBlock {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(RECOGNIZED_KEYS.len() + self.extra.len()))?;
    map.serialize_entry("Contributors", &self.contributors)?;
    map.serialize_entry("Tags", &self.tags)?;
    for key in &RECOGNIZED_KEYS[2..] {
      map.serialize_entry(key, &self.get(key))?;
    }
    for (key, value) in &self.extra {
      map.serialize_entry(key, value)?;
    }
    map.end()
  }
}

impl Document {
  /// First section with exactly this heading
  pub fn section(&self, heading: &str) -> Option<&Section> {
    self.sections.iter().find(|s| s.heading == heading)
  }

  /// Render as a GitHub-flavored README.md
  pub fn to_markdown(&self) -> String {
    let mut output = String::new();

    output.push_str("<!-- DO NOT EDIT THIS FILE; it is auto-generated from readme.txt -->\n");
    output.push_str(&format!("# {} #\n\n", self.title));
    output.push_str(&format!("{}\n\n", self.description));

    for (key, value) in self.meta.entries() {
      let rendered = match value {
        MetaValue::List(items) if key == "Contributors" => items
          .iter()
          .map(|c| format!("[{}](https://profiles.wordpress.org/{})", c, c))
          .collect::<Vec<_>>()
          .join(", "),
        MetaValue::List(items) if key == "Tags" => items
          .iter()
          .map(|t| format!("[{}](https://wordpress.org/plugins/tags/{})", t, t.replace(' ', "-")))
          .collect::<Vec<_>>()
          .join(", "),
        MetaValue::List(items) => items.join(", "),
        MetaValue::Text(text) => text.to_string(),
      };
      // Two trailing spaces force a Markdown line break
      output.push_str(&format!("**{}:** {}  \n", key, rendered));
    }
    output.push('\n');

    for section in &self.sections {
      output.push_str(&format!("## {} ##\n", section.heading));
      if let Some(body) = &section.body {
        output.push_str(&format!("{}\n", body.trim()));
      }
      output.push('\n');

      for sub in &section.subsections {
        output.push_str(&format!("### {} ###\n", sub.heading));
        output.push_str(&format!("{}\n\n", sub.body));
      }
    }

    output
  }
}
