//! Release utilities for WordPress plugins and themes
//!
//! The library half of `wpt` holds the parts that work on in-memory text and
//! never touch the filesystem, a process, or the terminal:
//!
//! - **readme**: `readme.txt` parser, changelog lookup, stable-tag checks, Markdown rendering
//! - **i18n**: PHP lexer and gettext textdomain validator
//! - **header**: plugin/theme main-file header fields
//! - **release**: WordPress version normalization and `Requires at least` / `Tested up to` rewriting
//!
//! Everything here is synchronous and holds no shared state, so callers may run
//! independent inputs in parallel.

pub mod header;
pub mod i18n;
pub mod readme;
pub mod release;
