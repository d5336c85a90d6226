//! WordPress compatibility bumps
//!
//! `bump wp-version <FROM> <TO>` raises the supported WordPress range of a
//! project: `Requires at least` becomes FROM and `Tested up to` becomes TO,
//! in both readme.txt and the main file header.

mod requirements;
mod version;

pub use requirements::{Bumped, bump_requirements};
pub use version::{BumpError, normalize, validate_range};
