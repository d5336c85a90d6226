//! `wpt bump wp-version`: raise `Requires at least` / `Tested up to`

use crate::core::context::ProjectContext;
use crate::core::error::{ResultExt, WptResult};
use crate::ui::log;
use crate::utils::display_path;
use std::fs;
use std::path::{Path, PathBuf};
use wpt::header::FileHeader;
use wpt::release::{Bumped, bump_requirements, validate_range};

const REQUIRES: &str = "Requires at least";
const TESTED: &str = "Tested up to";

/// Both files are resolved and rewritten in memory before either is written
pub fn run_bump_wp_version(
  ctx: &ProjectContext,
  from: String,
  to: String,
  file: Option<PathBuf>,
  dry_run: bool,
) -> WptResult<()> {
  validate_range(&from, &to)?;

  let (readme_path, readme_content) = ctx.read_readme()?;
  let doc = wpt::readme::parse(&readme_content)?;
  let readme = bump_requirements(
    &readme_content,
    doc.meta.requires_at_least.as_deref(),
    doc.meta.tested_up_to.as_deref(),
    &from,
    &to,
  );

  let project_type = ctx.project_type(None);
  let (main_path, main_content) = ctx.read_main(file.as_deref(), project_type)?;
  let header = FileHeader::parse_with(&main_content, project_type, &[REQUIRES, TESTED]);
  let main = bump_requirements(&main_content, header.get(REQUIRES), header.get(TESTED), &from, &to);

  apply(ctx, &readme_path, readme, dry_run)?;
  apply(ctx, &main_path, main, dry_run)?;

  if dry_run {
    println!();
    println!("🔍 Dry-run mode (no files written)");
  }
  Ok(())
}

fn apply(ctx: &ProjectContext, path: &Path, bumped: Bumped, dry_run: bool) -> WptResult<()> {
  let shown = display_path(path, &ctx.root);

  if !bumped.changed() {
    log::warning(format!("Nothing updated in {}.", shown));
    return Ok(());
  }

  let lines = [(bumped.min_changed, REQUIRES), (bumped.max_changed, TESTED)]
    .iter()
    .filter(|(changed, _)| *changed)
    .map(|(_, label)| *label)
    .collect::<Vec<_>>()
    .join(" and ");

  if dry_run {
    log::info(format!("Would update {} in {}.", lines, shown));
    return Ok(());
  }

  fs::write(path, bumped.content).with_context(|| format!("Failed to write {}", path.display()))?;
  log::success(format!("Updated {} in {}.", lines, shown));
  Ok(())
}
