//! Release checks against a parsed readme

use super::document::Document;
use super::error::ReadmeError;

/// Outcome of a successful stable-tag check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionCheck {
  /// `Stable tag` equals the expected version
  Match,
  /// `Stable tag` is `trunk`; not an error, but callers should warn
  Trunk,
}

/// Changelog text for `version`
///
/// Only the first (most recent) entry of the `Changelog` section qualifies:
/// an older entry with the same heading is still a mismatch.
pub fn changelog_for<'a>(doc: &'a Document, version: &str) -> Result<&'a str, ReadmeError> {
  doc
    .section("Changelog")
    .and_then(|section| section.subsections.first())
    .filter(|entry| entry.heading == version && !entry.body.is_empty())
    .map(|entry| entry.body.as_str())
    .ok_or_else(|| ReadmeError::ChangelogMismatch {
      version: version.to_string(),
    })
}

/// Compare `Stable tag` with the version declared in the main file
pub fn check_version_consistency(doc: &Document, expected: &str) -> Result<VersionCheck, ReadmeError> {
  match doc.meta.stable_tag.as_deref() {
    Some(tag) if tag.trim().eq_ignore_ascii_case("trunk") => Ok(VersionCheck::Trunk),
    Some(tag) if tag == expected => Ok(VersionCheck::Match),
    found => Err(ReadmeError::VersionMismatch {
      expected: expected.to_string(),
      found: found.map(String::from),
    }),
  }
}
