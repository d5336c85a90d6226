//! Progress indicators for long-running operations
//!
//! Uses `linya`, whose bars can be shared across rayon workers

use linya::{Bar, Progress};
use std::io::IsTerminal;
use std::sync::{Arc, Mutex};

/// Below this many files a bar is more noise than help
const MIN_FILES_FOR_BAR: usize = 20;

/// Thread-safe progress bar for per-file work
#[derive(Clone)]
pub struct FileProgress {
  progress: Arc<Mutex<Progress>>,
  bar: Arc<Bar>,
}

impl FileProgress {
  /// Create a new progress bar for processing `total` files
  pub fn new(total: usize, label: impl Into<String>) -> Self {
    let mut progress = Progress::new();
    let bar = progress.bar(total, label.into());
    Self {
      progress: Arc::new(Mutex::new(progress)),
      bar: Arc::new(bar),
    }
  }

  /// A bar only for large batches on an interactive terminal
  pub fn for_batch(total: usize, label: impl Into<String>) -> Option<Self> {
    (total >= MIN_FILES_FOR_BAR && std::io::stderr().is_terminal()).then(|| Self::new(total, label))
  }

  /// Increment progress by 1 (safe to call from worker threads)
  pub fn inc(&self) {
    if let Ok(mut progress) = self.progress.lock() {
      progress.inc_and_draw(&self.bar, 1);
    }
  }
}
