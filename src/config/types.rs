//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors (default; stdout carries the report lines)
    #[default]
    Quiet,
    /// Completed actions
    Normal,
    /// Per-file decisions
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for a run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Characters removed from the stem of each file name
    pub strip: Option<String>,
    /// Replace spaces with underscores (takes precedence over `dash`)
    pub underscore: bool,
    /// Replace spaces with dashes
    pub dash: bool,
    /// Copy to the new name and leave the original alone
    pub backup: bool,
    /// Ask before each rename/copy
    pub interactive: bool,
    /// If true, print actions but do not modify the filesystem
    pub dry_run: bool,
    /// Print a line for every file processed
    pub verbose: bool,
    /// Diagnostic log verbosity (stderr)
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Emit logs as JSON
    pub json: bool,
}
