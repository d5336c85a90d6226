//! CLI commands for wpt
//!
//! - **info**: Show the main file header
//! - **readme**: Parse readme.txt, print the latest changelog, check the stable tag, render README.md
//! - **i18n**: Validate gettext textdomains in PHP files
//! - **bump**: Bump `Requires at least` / `Tested up to`
//!
//! All commands accept `&ProjectContext` to avoid reloading configuration.

pub mod bump;
pub mod i18n;
pub mod info;
pub mod readme;

pub use bump::run_bump_wp_version;
pub use i18n::run_validate_i18n;
pub use info::run_info;
pub use readme::{run_readme_changelog, run_readme_check_version, run_readme_markdown, run_readme_parse};
