//! WordPress-style version numbers
//!
//! WordPress writes versions as `4.7` or `5`, which semver rejects. They are
//! padded to three components before comparing.

use semver::Version;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpError {
  /// Not one to three dot-separated numeric components
  InvalidVersion { role: &'static str, value: String },
  /// `to` is lower than `from`
  RangeInverted { from: String, to: String },
}

impl fmt::Display for BumpError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BumpError::InvalidVersion { role, value } => {
        write!(f, "Value <{}>, {}, is not a valid version.", role, value)
      }
      BumpError::RangeInverted { from, to } => write!(
        f,
        "Version of <to>, {}, must be greater than or equal to <from>, {}.",
        to, from
      ),
    }
  }
}

impl std::error::Error for BumpError {}

/// Pad `1` to `1.0.0` and `1.2` to `1.2.0`, then parse as semver
///
/// Returns `None` for anything with more than three components or that
/// semver rejects after padding.
pub fn normalize(version: &str) -> Option<Version> {
  let version = version.trim();
  let padded = match version.split('.').count() {
    1 => format!("{}.0.0", version),
    2 => format!("{}.0", version),
    3 => version.to_string(),
    _ => return None,
  };
  Version::parse(&padded).ok()
}

/// Both ends must be valid and `to >= from`
pub fn validate_range(from: &str, to: &str) -> Result<(Version, Version), BumpError> {
  let invalid = |role, value: &str| BumpError::InvalidVersion {
    role,
    value: value.to_string(),
  };

  let from_v = normalize(from).ok_or_else(|| invalid("from", from))?;
  let to_v = normalize(to).ok_or_else(|| invalid("to", to))?;

  if to_v < from_v {
    return Err(BumpError::RangeInverted {
      from: from.to_string(),
      to: to.to_string(),
    });
  }
  Ok((from_v, to_v))
}
