//! Utility functions for path handling

use std::path::{Path, PathBuf};

/// First of `candidates` (relative to `root`) that is an existing file
pub fn first_existing(root: &Path, candidates: &[&str]) -> Option<PathBuf> {
  candidates.iter().map(|name| root.join(name)).find(|p| p.is_file())
}

/// Path shown to the user: relative to `root` when possible, `/`-separated
pub fn display_path(path: &Path, root: &Path) -> String {
  let shown = path.strip_prefix(root).unwrap_or(path);
  #[cfg(target_os = "windows")]
  {
    shown.to_string_lossy().replace('\\', "/")
  }
  #[cfg(not(target_os = "windows"))]
  {
    shown.to_string_lossy().to_string()
  }
}

/// Last component of `root`, used as a fallback project slug
pub fn dir_name(root: &Path) -> String {
  root
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_default()
}
