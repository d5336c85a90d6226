//! `wpt validate-i18n`: check gettext calls in PHP sources

use crate::core::context::ProjectContext;
use crate::core::error::{ResultExt, ValidationError, WptError, WptResult};
use crate::ui::log;
use crate::ui::progress::FileProgress;
use crate::utils::display_path;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use wpt::i18n::{self, RuleSet};

/// Diagnostics for one file
#[derive(Debug, Serialize)]
struct FileReport {
  file: String,
  errors: Vec<i18n::ValidationError>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
  domain: &'a str,
  files_checked: usize,
  files: Vec<&'a FileReport>,
}

pub fn run_validate_i18n(
  ctx: &ProjectContext,
  files: Vec<PathBuf>,
  domain: Option<String>,
  file: Option<PathBuf>,
  json: bool,
) -> WptResult<()> {
  let domain = ctx.text_domain(domain, file.as_deref());
  let rules = ctx.config.rules();

  let targets = if files.is_empty() {
    discover(ctx)?
  } else {
    explicit(ctx, &files)?
  };
  tracing::debug!(%domain, files = targets.len(), functions = rules.len(), "validating i18n");

  let progress = FileProgress::for_batch(targets.len(), "Validating i18n");
  let reports = targets
    .par_iter()
    .map(|path| {
      let report = check_file(ctx, path, &domain, &rules);
      if let Some(p) = &progress {
        p.inc();
      }
      report
    })
    .collect::<WptResult<Vec<_>>>()?;

  let failing: Vec<&FileReport> = reports.iter().filter(|r| !r.errors.is_empty()).collect();
  let error_count: usize = failing.iter().map(|r| r.errors.len()).sum();

  if json {
    let report = Report {
      domain: &domain,
      files_checked: reports.len(),
      files: failing.clone(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    for report in &failing {
      print_file_report(report);
    }
  }

  if !failing.is_empty() {
    return Err(WptError::Validation(ValidationError::I18n {
      errors: error_count,
      files: failing.len(),
    }));
  }

  if !json {
    log::success(format!(
      "No i18n errors in {} file(s) for textdomain '{}'.",
      reports.len(),
      domain
    ));
  }
  Ok(())
}

fn print_file_report(report: &FileReport) {
  log::error(&report.file);
  log::error("-".repeat(report.file.chars().count()));
  for error in &report.errors {
    log::error(error);
  }
  println!();
}

fn check_file(ctx: &ProjectContext, path: &Path, domain: &str, rules: &RuleSet) -> WptResult<FileReport> {
  let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
  let source = String::from_utf8_lossy(&bytes);
  let errors = i18n::validate_source(&source, domain, rules);
  Ok(FileReport {
    file: display_path(path, &ctx.root),
    errors,
  })
}

fn explicit(ctx: &ProjectContext, files: &[PathBuf]) -> WptResult<Vec<PathBuf>> {
  files
    .iter()
    .map(|file| {
      let path = ctx.root.join(file);
      if path.is_file() {
        Ok(path)
      } else {
        Err(WptError::message(format!("File {} does not exist.", file.display())))
      }
    })
    .collect()
}

/// PHP files matching `files.src` and not `files.exclude`, sorted
fn discover(ctx: &ProjectContext) -> WptResult<Vec<PathBuf>> {
  let files = &ctx.config.files;
  let root = glob::Pattern::escape(&ctx.root.to_string_lossy());
  let exclude = files
    .exclude
    .iter()
    .map(|p| glob::Pattern::new(p))
    .collect::<Result<Vec<_>, _>>()?;

  let mut found = Vec::new();
  for pattern in &files.src {
    for path in glob::glob(&format!("{}/{}", root, pattern))?.filter_map(Result::ok) {
      let relative = path.strip_prefix(&ctx.root).unwrap_or(&path);
      let is_php = path.extension().is_some_and(|ext| ext == "php");
      if path.is_file() && is_php && !exclude.iter().any(|ex| ex.matches_path(relative)) {
        found.push(path);
      }
    }
  }

  found.sort();
  found.dedup();
  Ok(found)
}
