//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - `--dry-run` is an alias of `--just-print`.
//! - `--underscore` and `--dash` are mutually exclusive.

use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Remove spaces from FILE name(s).
///
/// Files are renamed in place unless --backup is given, in which case the
/// contents are copied to a new file with the fixed name.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "spacerm",
    author,
    version,
    about = "Remove spaces from FILE name(s)",
    after_help = "Examples:\n  spacerm 'first file' 'second file' 'third file'\n  spacerm -iu 'first file'\n  spacerm -b -v '/home/user/file name'"
)]
pub struct Args {
    /// Files to fix; only the final path component is changed.
    #[arg(
        value_name = "FILE",
        required_unless_present = "print_config",
        num_args = 1..,
        value_hint = ValueHint::FilePath
    )]
    pub files: Vec<String>,

    #[arg(short = 'b', long, help = "Leave the original file unchanged")]
    pub backup: bool,

    #[arg(
        short = 'd',
        long,
        conflicts_with = "underscore",
        help = "Replace spaces with dashes/hyphens"
    )]
    pub dash: bool,

    #[arg(short = 'i', long, help = "Prompt before renaming or copying file")]
    pub interactive: bool,

    #[arg(
        short = 'n',
        long = "just-print",
        visible_alias = "dry-run",
        action = ArgAction::SetTrue,
        help = "Print what would be done, but do nothing"
    )]
    pub dry_run: bool,

    #[arg(
        short = 's',
        long,
        value_name = "CHARS",
        help = "Remove the given characters from filename"
    )]
    pub strip: Option<String>,

    #[arg(short = 'u', long, help = "Replace spaces with underscores")]
    pub underscore: bool,

    #[arg(short = 'v', long, help = "Verbosely list files processed")]
    pub verbose: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    #[arg(long, value_hint = ValueHint::FilePath, help = "Also write logs to this file")]
    pub log_file: Option<PathBuf>,

    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where spacerm looks for its config file, then exit.
    #[arg(
        long,
        exclusive = true,
        help = "Print the config file location used by spacerm and exit"
    )]
    pub print_config: bool,
}

impl Args {
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(strip) = &self.strip {
            cfg.strip = Some(strip.clone());
        }
        // A space flag on the command line replaces whatever the file chose.
        if self.underscore || self.dash {
            cfg.underscore = self.underscore;
            cfg.dash = self.dash;
        }
        if self.backup {
            cfg.backup = true;
        }
        if self.interactive {
            cfg.interactive = true;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.verbose {
            cfg.verbose = true;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if self.json {
            cfg.json = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
