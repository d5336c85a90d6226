//! `Requires at least` / `Tested up to` rewriting

use super::version::normalize;
use regex::{Captures, Regex};

/// Rewritten content plus which lines changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bumped {
  pub content: String,
  pub min_changed: bool,
  pub max_changed: bool,
}

impl Bumped {
  pub fn changed(&self) -> bool {
    self.min_changed || self.max_changed
  }
}

/// Replace the current minimum and maximum tested versions in `content`
///
/// `current_min`/`current_max` are the values read from the file (readme
/// meta or main-file header). A line is rewritten only when its current
/// value is known and differs from the target; only the first occurrence
/// is touched.
pub fn bump_requirements(
  content: &str,
  current_min: Option<&str>,
  current_max: Option<&str>,
  from: &str,
  to: &str,
) -> Bumped {
  let mut content = content.to_string();

  let min_changed = differs(current_min, from)
    && current_min.is_some_and(|cur| replace_first(&mut content, "Requires at least", cur, from));
  let max_changed = differs(current_max, to)
    && current_max.is_some_and(|cur| replace_first(&mut content, "Tested up to", cur, to));

  Bumped {
    content,
    min_changed,
    max_changed,
  }
}

fn differs(current: Option<&str>, target: &str) -> bool {
  match current.filter(|c| !c.trim().is_empty()) {
    None => false,
    Some(cur) => match (normalize(cur), normalize(target)) {
      (Some(a), Some(b)) => a != b,
      _ => true,
    },
  }
}

fn replace_first(content: &mut String, label: &str, current: &str, new: &str) -> bool {
  let pattern = format!(r"({}\s*:\s*){}", regex::escape(label), regex::escape(current));
  let Ok(re) = Regex::new(&pattern) else {
    return false;
  };
  if !re.is_match(content) {
    return false;
  }

  let updated = re
    .replacen(content, 1, |caps: &Captures| format!("{}{}", &caps[1], new))
    .into_owned();
  *content = updated;
  true
}
