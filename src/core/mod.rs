//! Core plumbing shared by every command
//!
//! - **config**: wpt.toml parsing and validation
//! - **context**: Project root and configuration, loaded once in main
//! - **error**: Error types with exit codes and contextual help messages

pub mod config;
pub mod context;
pub mod error;
