//! Error types for wpt with contextual messages and exit codes
//!
//! Library errors ([`ReadmeError`], [`BumpError`]) are wrapped here so every
//! failure maps to one exit code and, where we can offer one, a help line.

use std::fmt;
use std::io;
use std::path::PathBuf;
use wpt::readme::ReadmeError;
use wpt::release::BumpError;

/// Exit codes for wpt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing files, unparsable readme)
  User = 1,
  /// System error (I/O)
  System = 2,
  /// Validation failure (i18n diagnostics, changelog or stable tag mismatch)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for wpt
#[derive(Debug)]
pub enum WptError {
  /// Configuration errors
  Config(ConfigError),

  /// readme.txt could not be parsed or failed a check
  Readme(ReadmeError),

  /// Invalid `bump wp-version` arguments
  Bump(BumpError),

  /// Checks ran and found problems
  Validation(ValidationError),

  /// I/O errors
  Io { source: io::Error, context: Option<String> },

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl WptError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    WptError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    WptError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      WptError::Message { message, context, help } => WptError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      WptError::Io { source, context } => WptError::Io {
        source,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      WptError::Config(_) => ExitCode::User,
      WptError::Readme(e) if e.is_structural() => ExitCode::User,
      WptError::Readme(_) => ExitCode::Validation,
      WptError::Bump(_) => ExitCode::User,
      WptError::Validation(_) => ExitCode::Validation,
      WptError::Io { .. } => ExitCode::System,
      WptError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      WptError::Config(e) => e.help_message(),
      WptError::Readme(e) => readme_help(e),
      WptError::Validation(e) => e.help_message(),
      WptError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

fn readme_help(err: &ReadmeError) -> Option<String> {
  match err {
    ReadmeError::MalformedMetadataBlock => Some(
      "readme.txt must start with `=== Name ===`, the meta lines, a blank line and a short description.".to_string(),
    ),
    ReadmeError::MetaBlockParseError { .. } => {
      Some("Every line between the title and the first blank line must be `Key: value`.".to_string())
    }
    ReadmeError::SectionParseError { .. } => Some("Add at least one `== Section ==` heading.".to_string()),
    ReadmeError::ChangelogMismatch { version } => {
      Some(format!("Add `= {} =` as the first entry under `== Changelog ==`.", version))
    }
    ReadmeError::VersionMismatch { .. } => {
      Some("Update `Stable tag` in readme.txt or the `Version` header in the main file.".to_string())
    }
  }
}

impl fmt::Display for WptError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      WptError::Config(e) => write!(f, "{}", e),
      WptError::Readme(e) => write!(f, "{}", e),
      WptError::Bump(e) => write!(f, "{}", e),
      WptError::Validation(e) => write!(f, "{}", e),
      WptError::Io { source, context } => {
        write!(f, "I/O error: {}", source)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
      WptError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for WptError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      WptError::Io { source, .. } => Some(source),
      WptError::Readme(e) => Some(e),
      WptError::Bump(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for WptError {
  fn from(err: io::Error) -> Self {
    WptError::Io {
      source: err,
      context: None,
    }
  }
}

impl From<ReadmeError> for WptError {
  fn from(err: ReadmeError) -> Self {
    WptError::Readme(err)
  }
}

impl From<BumpError> for WptError {
  fn from(err: BumpError) -> Self {
    WptError::Bump(err)
  }
}

impl From<ConfigError> for WptError {
  fn from(err: ConfigError) -> Self {
    WptError::Config(err)
  }
}

impl From<String> for WptError {
  fn from(msg: String) -> Self {
    WptError::message(msg)
  }
}

impl From<&str> for WptError {
  fn from(msg: &str) -> Self {
    WptError::message(msg)
  }
}

impl From<serde_json::Error> for WptError {
  fn from(err: serde_json::Error) -> Self {
    WptError::message(format!("JSON error: {}", err))
  }
}

impl From<glob::PatternError> for WptError {
  fn from(err: glob::PatternError) -> Self {
    WptError::with_help(
      format!("Invalid file pattern: {}", err),
      "Patterns in `files.src` use glob syntax, e.g. `**/*.php`.",
    )
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// An explicitly requested config file does not exist
  NotFound { path: PathBuf },

  /// The file exists but is not valid TOML for our schema
  Parse { path: PathBuf, message: String },

  /// A field holds a value we cannot use
  InvalidField { field: String, reason: String },

  /// The main plugin/theme file could not be located
  MainFileNotFound { path: PathBuf },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("wpt looks for wpt.toml, .wpt.toml or .config/wpt.toml when --config is not given.".to_string())
      }
      ConfigError::MainFileNotFound { .. } => {
        Some("Specify it via --file or define `files.main` in wpt.toml.".to_string())
      }
      ConfigError::InvalidField { field, .. } if field.starts_with("i18n.functions") => Some(
        "Function params must be one of: text, singular, plural, count, context.".to_string(),
      ),
      _ => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { path } => write!(f, "Config file {} does not exist.", path.display()),
      ConfigError::Parse { path, message } => {
        write!(f, "Something wrong when reading {}.\n{}", path.display(), message)
      }
      ConfigError::InvalidField { field, reason } => write!(f, "Invalid `{}` in config: {}", field, reason),
      ConfigError::MainFileNotFound { path } => write!(f, "File {} does not exist.", path.display()),
    }
  }
}

/// Checks that ran to completion and reported problems
#[derive(Debug)]
pub enum ValidationError {
  /// validate-i18n found diagnostics
  I18n { errors: usize, files: usize },
}

impl ValidationError {
  fn help_message(&self) -> Option<String> {
    match self {
      ValidationError::I18n { .. } => Some(
        "Pass the textdomain as a literal single-quoted string in the last argument of each gettext call."
          .to_string(),
      ),
    }
  }
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ValidationError::I18n { errors, files } => {
        write!(f, "Found {} i18n error(s) in {} file(s).", errors, files)
      }
    }
  }
}

/// Result type alias for wpt
pub type WptResult<T> = Result<T, WptError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> WptResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> WptResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<WptError>,
{
  fn context(self, ctx: impl Into<String>) -> WptResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> WptResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &WptError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
