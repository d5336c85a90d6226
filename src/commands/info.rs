//! `wpt info`: print the main file header

use crate::core::context::ProjectContext;
use crate::core::error::WptResult;
use crate::ui::log;
use std::path::PathBuf;
use wpt::header::ProjectType;

pub fn run_info(ctx: &ProjectContext, file: Option<PathBuf>, project_type: Option<ProjectType>, json: bool) -> WptResult<()> {
  let project_type = ctx.project_type(project_type);
  let (_, header) = ctx.read_header(file.as_deref(), project_type)?;

  if json {
    println!("{}", serde_json::to_string_pretty(&header)?);
    return Ok(());
  }

  if !header.name().is_empty() {
    log::info(format!("📦 {}", header.name()));
  }
  log::field("Project Type", &ucfirst(&project_type.to_string()));
  for (label, value) in header.fields() {
    log::field(label, value);
  }
  Ok(())
}

fn ucfirst(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
