mod commands;
mod core;
mod ui;
mod utils;

use clap::{Parser, Subcommand};
use crate::core::context::ProjectContext;
use crate::core::error::{ResultExt, WptError, print_error};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wpt::header::ProjectType;

/// Release and QA helpers for WordPress plugins and themes
#[derive(Parser)]
#[command(name = "wpt")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Config file to use instead of searching wpt.toml, .wpt.toml, .config/wpt.toml
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Print debug logs to stderr (or set WPT_LOG, e.g. WPT_LOG=wpt=trace)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show plugin or theme info from the main file header
  Info {
    /// Main plugin file or theme stylesheet
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Project type: plugin or theme
    #[arg(short = 't', long = "type")]
    project_type: Option<ProjectType>,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// readme.txt parsing and release checks
  #[command(subcommand)]
  Readme(ReadmeCommands),

  /// Validate gettext textdomains in PHP files
  #[command(name = "validate-i18n")]
  ValidateI18n {
    /// Files to check (default: `files.src` from config, or every PHP file)
    files: Vec<PathBuf>,
    /// Expected textdomain (default: config, then the main file's Text Domain)
    #[arg(short, long)]
    domain: Option<String>,
    /// Main plugin file used to find the default textdomain
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Version bumps
  #[command(subcommand)]
  Bump(BumpCommands),
}

#[derive(Subcommand)]
enum ReadmeCommands {
  /// Parse readme.txt and print its structure
  Parse {
    /// Output the parsed document as JSON
    #[arg(long)]
    json: bool,
  },

  /// Print the latest changelog entry, which must match VERSION
  Changelog {
    /// Version to look for (default: main file Version header)
    #[arg(id = "version_arg", value_name = "VERSION")]
    version: Option<String>,
    /// Main plugin file or theme stylesheet
    #[arg(short, long)]
    file: Option<PathBuf>,
  },

  /// Check that Stable tag matches VERSION
  CheckVersion {
    /// Expected version (default: main file Version header)
    #[arg(id = "version_arg", value_name = "VERSION")]
    version: Option<String>,
    /// Main plugin file or theme stylesheet
    #[arg(short, long)]
    file: Option<PathBuf>,
  },

  /// Generate README.md from readme.txt
  Markdown {
    /// Output path (default: README.md)
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,
    /// Print to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
  },
}

#[derive(Subcommand)]
enum BumpCommands {
  /// Bump "Requires at least" to FROM and "Tested up to" to TO
  WpVersion {
    /// Minimum required WordPress version
    from: String,
    /// Highest tested WordPress version
    to: String,
    /// Main plugin file or theme stylesheet
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Show what would change without writing files
    #[arg(long)]
    dry_run: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

/// Diagnostics go to stderr so stdout stays clean for --json and --stdout
fn init_tracing(verbose: bool) {
  let filter = EnvFilter::try_from_env("WPT_LOG").unwrap_or_else(|_| {
    if verbose {
      EnvFilter::new("wpt=debug")
    } else {
      EnvFilter::new("warn")
    }
  });

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .try_init();
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let root = match std::env::current_dir().context("Failed to get current directory") {
    Ok(dir) => dir,
    Err(e) => handle_error(e),
  };

  let ctx = match ProjectContext::build(&root, cli.config.as_deref()) {
    Ok(ctx) => ctx,
    Err(e) => handle_error(e),
  };

  let result = match cli.command {
    Commands::Info {
      file,
      project_type,
      json,
    } => commands::run_info(&ctx, file, project_type, json),

    Commands::Readme(readme_cmd) => match readme_cmd {
      ReadmeCommands::Parse { json } => commands::run_readme_parse(&ctx, json),
      ReadmeCommands::Changelog { version, file } => commands::run_readme_changelog(&ctx, version, file),
      ReadmeCommands::CheckVersion { version, file } => commands::run_readme_check_version(&ctx, version, file),
      ReadmeCommands::Markdown { output, stdout } => commands::run_readme_markdown(&ctx, output, stdout),
    },

    Commands::ValidateI18n {
      files,
      domain,
      file,
      json,
    } => commands::run_validate_i18n(&ctx, files, domain, file, json),

    Commands::Bump(bump_cmd) => match bump_cmd {
      BumpCommands::WpVersion {
        from,
        to,
        file,
        dry_run,
      } => commands::run_bump_wp_version(&ctx, from, to, file, dry_run),
    },
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: WptError) -> ! {
  tracing::debug!(error = ?err, "command failed");
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
