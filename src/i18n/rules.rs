//! Translation function table
//!
//! Which identifiers count as gettext calls, and what their arguments are,
//! is plain data. The validator derives the textdomain position from the
//! number of declared params and never hardcodes a function name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Role of one declared argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamRole {
  /// Text to translate
  Text,
  Singular,
  Plural,
  /// Numeric count selecting the plural form; may be any expression
  Count,
  /// Disambiguation context
  Context,
}

impl fmt::Display for ParamRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      ParamRole::Text => "text",
      ParamRole::Singular => "singular",
      ParamRole::Plural => "plural",
      ParamRole::Count => "count",
      ParamRole::Context => "context",
    };
    write!(f, "{}", name)
  }
}

/// Declared arguments of one translation function, textdomain excluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRule {
  pub params: Vec<ParamRole>,
}

impl FunctionRule {
  pub fn new(params: impl Into<Vec<ParamRole>>) -> Self {
    Self { params: params.into() }
  }

  /// 0-based argument index where the textdomain is expected
  pub fn domain_position(&self) -> usize {
    self.params.len()
  }

  /// Whether a non-literal argument is tolerated at `index`
  pub fn accepts_expression_at(&self, index: usize) -> bool {
    self.params.get(index) == Some(&ParamRole::Count)
  }
}

/// Set of recognized translation functions keyed by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
  rules: BTreeMap<String, FunctionRule>,
}

impl RuleSet {
  /// A table with no functions at all
  pub fn empty() -> Self {
    Self { rules: BTreeMap::new() }
  }

  /// Add or replace a rule
  pub fn insert(&mut self, name: impl Into<String>, rule: FunctionRule) {
    self.rules.insert(name.into(), rule);
  }

  pub fn with(mut self, name: impl Into<String>, params: impl Into<Vec<ParamRole>>) -> Self {
    self.insert(name, FunctionRule::new(params));
    self
  }

  pub fn get(&self, name: &str) -> Option<&FunctionRule> {
    self.rules.get(name)
  }

  pub fn len(&self) -> usize {
    self.rules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rules.is_empty()
  }
}

/// WordPress core gettext functions
impl Default for RuleSet {
  fn default() -> Self {
    use ParamRole::*;

    RuleSet::empty()
      // simple and echo
      .with("__", [Text])
      .with("_e", [Text])
      // escaped
      .with("esc_attr__", [Text])
      .with("esc_html__", [Text])
      .with("esc_attr_e", [Text])
      .with("esc_html_e", [Text])
      // contextual
      .with("_x", [Text, Context])
      .with("_ex", [Text, Context])
      .with("esc_attr_x", [Text, Context])
      .with("esc_html_x", [Text, Context])
      // plural
      .with("_n", [Singular, Plural, Count])
      .with("_nx", [Singular, Plural, Count, Context])
      .with("_n_noop", [Singular, Plural])
      .with("_nx_noop", [Singular, Plural, Context])
  }
}
