//! Terminal output: colored messages and progress bars

pub mod log;
pub mod progress;
