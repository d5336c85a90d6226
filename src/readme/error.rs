use std::fmt;

/// Errors produced while parsing or checking a `readme.txt`
///
/// The first three variants are structural: the document could not be parsed
/// at all. The last two come from checks run against an already parsed
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeError {
  /// The `=== Title ===` / meta block / description split did not match
  MalformedMetadataBlock,

  /// A line inside the meta block is not `Key: value`
  MetaBlockParseError { line: String },

  /// No `== Heading ==` section follows the description
  SectionParseError { reason: String },

  /// The most recent changelog entry is missing or is not the requested version
  ChangelogMismatch { version: String },

  /// `Stable tag` disagrees with the expected version
  VersionMismatch { expected: String, found: Option<String> },
}

impl ReadmeError {
  /// Whether the error means the document itself could not be parsed
  pub fn is_structural(&self) -> bool {
    matches!(
      self,
      ReadmeError::MalformedMetadataBlock | ReadmeError::MetaBlockParseError { .. } | ReadmeError::SectionParseError { .. }
    )
  }
}

impl fmt::Display for ReadmeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReadmeError::MalformedMetadataBlock => write!(f, "Malformed metadata block"),
      ReadmeError::MetaBlockParseError { line } => {
        write!(f, "Parse error meta block: '{}' is not a 'Key: value' line", line)
      }
      ReadmeError::SectionParseError { reason } => write!(f, "Failed to parse sections: {}", reason),
      ReadmeError::ChangelogMismatch { version } => write!(
        f,
        "Missing changelog for {} in readme.txt. Or latest changelog in readme.txt is not {}.",
        version, version
      ),
      ReadmeError::VersionMismatch { expected, found } => write!(
        f,
        "Version in main file ({}) does not match with stable tag in readme.txt ({}).",
        expected,
        found.as_deref().unwrap_or("missing")
      ),
    }
  }
}

impl std::error::Error for ReadmeError {}
