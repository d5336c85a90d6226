//! `wpt readme ...`: parse, changelog, check-version, markdown

use crate::core::context::ProjectContext;
use crate::core::error::{ResultExt, WptResult};
use crate::ui::log;
use crate::utils::display_path;
use std::fs;
use std::path::PathBuf;
use wpt::readme::{Document, MetaValue, VersionCheck, changelog_for, check_version_consistency};

/// Parse readme.txt and print its structure
pub fn run_readme_parse(ctx: &ProjectContext, json: bool) -> WptResult<()> {
  let (path, doc) = ctx.parse_readme()?;

  if json {
    println!("{}", serde_json::to_string_pretty(&doc)?);
    return Ok(());
  }

  print_summary(&doc);
  println!();
  log::success(format!("{} parsed", display_path(&path, &ctx.root)));
  Ok(())
}

fn print_summary(doc: &Document) {
  println!("📦 {}", doc.title);
  println!("   {}", doc.description);
  println!();
  for (key, value) in doc.meta.entries() {
    let value = match value {
      MetaValue::List(items) => items.join(", "),
      MetaValue::Text(text) => text.to_string(),
    };
    log::field(&format!("   {}", key), &value);
  }
  println!();
  for section in &doc.sections {
    match section.subsections.len() {
      0 => println!("   == {} ==", section.heading),
      n => println!("   == {} == ({} entries)", section.heading, n),
    }
  }
}

/// Print the changelog of the latest release, which must be `version`
pub fn run_readme_changelog(ctx: &ProjectContext, version: Option<String>, file: Option<PathBuf>) -> WptResult<()> {
  let version = ctx.expected_version(version, file.as_deref())?;
  let (_, doc) = ctx.parse_readme()?;
  let changelog = changelog_for(&doc, &version)?;
  println!("{}", changelog);
  Ok(())
}

/// Compare `Stable tag` with the expected version
pub fn run_readme_check_version(ctx: &ProjectContext, version: Option<String>, file: Option<PathBuf>) -> WptResult<()> {
  let version = ctx.expected_version(version, file.as_deref())?;
  let (_, doc) = ctx.parse_readme()?;

  match check_version_consistency(&doc, &version)? {
    VersionCheck::Match => log::success(format!("Stable tag matches version {}.", version)),
    VersionCheck::Trunk => log::warning("Stable tag in readme.txt is trunk, consider to use tag instead."),
  }
  Ok(())
}

/// Render readme.txt as README.md
pub fn run_readme_markdown(ctx: &ProjectContext, output: Option<PathBuf>, stdout: bool) -> WptResult<()> {
  let (_, doc) = ctx.parse_readme()?;
  let markdown = doc.to_markdown();

  if stdout {
    print!("{}", markdown);
    return Ok(());
  }

  let target = ctx.root.join(output.unwrap_or_else(|| PathBuf::from("README.md")));
  fs::write(&target, markdown).with_context(|| format!("Failed to write {}", target.display()))?;
  log::success(format!("Generated {}", display_path(&target, &ctx.root)));
  Ok(())
}
