//! WordPress `readme.txt` parsing and release checks
//!
//! A readme looks like:
//!
//! ```text
//! === Plugin Name ===
//! Contributors: akeda
//! Stable tag: 1.0
//!
//! Short description.
//!
//! == Changelog ==
//!
//! = 1.0 =
//! * Initial release.
//! ```
//!
//! [`parse`] turns that into a [`Document`]; [`changelog_for`] and
//! [`check_version_consistency`] are the checks the release workflows run on
//! top of it.

mod checks;
mod document;
mod error;
mod parser;

pub use checks::{VersionCheck, changelog_for, check_version_consistency};
pub use document::{Document, MetaBlock, MetaValue, RECOGNIZED_KEYS, Section, Subsection};
pub use error::ReadmeError;
pub use parser::parse;

/// File names tried, in order, when looking for a project's readme
pub const README_CANDIDATES: [&str; 2] = ["readme.txt", "README.txt"];
