//! Console messages
//!
//! Colored like clap's help output when stdout is a terminal, plain otherwise
//! so piped output stays greppable.

use anstyle::{AnsiColor, Color, Style};
use std::fmt::Display;
use std::io::IsTerminal;

fn paint(style: Style, msg: impl Display) -> String {
  if std::io::stdout().is_terminal() {
    format!("{}{}{}", style.render(), msg, style.render_reset())
  } else {
    msg.to_string()
  }
}

fn fg(color: AnsiColor) -> Style {
  Style::new().fg_color(Some(Color::Ansi(color)))
}

pub fn info(msg: impl Display) {
  println!("{}", msg);
}

/// `Label: value` line with a bold label
pub fn field(label: &str, value: &str) {
  println!("{} {}", paint(Style::new().bold(), format!("{}:", label)), value);
}

pub fn success(msg: impl Display) {
  println!("✅ {}", paint(fg(AnsiColor::Green), msg));
}

pub fn warning(msg: impl Display) {
  println!("⚠️  {}", paint(fg(AnsiColor::Yellow), msg));
}

/// A line of a failure report; the process exit code carries the verdict
pub fn error(msg: impl Display) {
  println!("{}", paint(fg(AnsiColor::Red), msg));
}
