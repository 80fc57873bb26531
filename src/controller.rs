//! Per-file orchestration.
//!
//! Each path goes through: permission check -> new name -> confirmation ->
//! dry-run short-circuit or mutation -> report. Paths are handled strictly one
//! after another. A naming failure only skips its file; a permission or I/O
//! failure stops the batch before the next path is looked at.

use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, info_span, warn};

use crate::config::Config;
use crate::console::Console;
use crate::errors::SpacermError;
use crate::fs_ops::{copy_file, rename_file};
use crate::guard::check_permissions;
use crate::naming::{renamed_path, SpacePolicy, TransformPolicy};

/// The filesystem action a run performs on each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Rename,
    /// Backup mode: the original stays, a renamed copy is created.
    Copy,
}

impl Operation {
    fn verb(self) -> &'static str {
        match self {
            Operation::Rename => "rename",
            Operation::Copy => "copy",
        }
    }

    fn past(self) -> &'static str {
        match self {
            Operation::Rename => "renamed",
            Operation::Copy => "copied",
        }
    }

    pub fn prompt_line(self, src: &str, dst: &str) -> String {
        format!("{} '{}' to '{}'? (Yes/No): ", self.verb(), src, dst)
    }

    pub fn dry_run_line(self, src: &str, dst: &str) -> String {
        format!("{} file: '{}' -> '{}'", self.verb(), src, dst)
    }

    pub fn done_line(self, src: &str, dst: &str) -> String {
        format!("{} file: '{}' -> '{}'", self.past(), src, dst)
    }
}

/// Immutable settings for one run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub policy: TransformPolicy,
    pub backup: bool,
    pub interactive: bool,
    pub dry_run: bool,
    pub verbose: bool,
}

impl RunOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            policy: TransformPolicy::new(
                cfg.strip.as_deref().unwrap_or(""),
                SpacePolicy::from_flags(cfg.underscore, cfg.dash),
            ),
            backup: cfg.backup,
            interactive: cfg.interactive,
            dry_run: cfg.dry_run,
            verbose: cfg.verbose,
        }
    }

    pub fn operation(&self) -> Operation {
        if self.backup {
            Operation::Copy
        } else {
            Operation::Rename
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Dry-run mode: the action was only reported.
    DryRun,
    /// The interactive prompt was not answered affirmatively.
    Declined,
    /// The transformed name equals the original; the file was left alone.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTaken {
    Renamed,
    Copied,
    Skipped(SkipReason),
    Failed,
}

/// What happened to one input path.
#[derive(Debug)]
pub struct OperationOutcome {
    pub source: String,
    /// Absent when no new name could be computed.
    pub destination: Option<String>,
    pub action: ActionTaken,
    pub error: Option<SpacermError>,
}

impl OperationOutcome {
    fn done(source: &str, destination: String, action: ActionTaken) -> Self {
        Self {
            source: source.to_owned(),
            destination: Some(destination),
            action,
            error: None,
        }
    }

    fn failed(source: &str, error: SpacermError) -> Self {
        Self {
            source: source.to_owned(),
            destination: None,
            action: ActionTaken::Failed,
            error: Some(error),
        }
    }

    /// True when the filesystem was changed for this path.
    pub fn is_mutated(&self) -> bool {
        matches!(self.action, ActionTaken::Renamed | ActionTaken::Copied)
    }
}

/// A fatal error that stopped the batch, with everything finished before it.
#[derive(Debug, Error)]
#[error("aborted at '{path}': {error}")]
pub struct BatchAborted {
    pub path: String,
    pub error: SpacermError,
    pub completed: Vec<OperationOutcome>,
}

pub struct OperationController<C> {
    options: RunOptions,
    console: C,
}

impl<C: Console> OperationController<C> {
    pub fn new(options: RunOptions, console: C) -> Self {
        Self { options, console }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Process every path in order, stopping at the first fatal error.
    pub fn run<I, S>(&mut self, paths: I) -> Result<Vec<OperationOutcome>, BatchAborted>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut completed = Vec::new();
        for path in paths {
            let path = path.as_ref();
            match self.process(path) {
                Ok(outcome) => completed.push(outcome),
                Err(error) => {
                    return Err(BatchAborted {
                        path: path.to_owned(),
                        error,
                        completed,
                    });
                }
            }
        }
        Ok(completed)
    }

    /// Process a single path. `Err` is always fatal for the batch.
    pub fn process(&mut self, path: &str) -> Result<OperationOutcome, SpacermError> {
        let span = info_span!("file", path);
        let _entered = span.enter();

        check_permissions(path)?;

        let dest = match renamed_path(path, &self.options.policy) {
            Ok(d) => d,
            Err(e) => {
                warn!(error = %e, "cannot compute a new name; skipping");
                if let Err(io_err) = self.console.diagnose(&format!("path error: {e}")) {
                    warn!(error = %io_err, "failed to write diagnostic");
                }
                return Ok(OperationOutcome::failed(path, e));
            }
        };

        let op = self.options.operation();

        if self.options.interactive {
            let question = op.prompt_line(path, &dest);
            let yes = self.console.confirm(&question).unwrap_or_else(|e| {
                warn!(error = %e, "could not read an answer; treating as no");
                false
            });
            if !yes {
                debug!(dest = %dest, "declined");
                return Ok(OperationOutcome::done(
                    path,
                    dest,
                    ActionTaken::Skipped(SkipReason::Declined),
                ));
            }
        }

        if self.options.dry_run {
            self.emit(&op.dry_run_line(path, &dest));
            return Ok(OperationOutcome::done(
                path,
                dest,
                ActionTaken::Skipped(SkipReason::DryRun),
            ));
        }

        let action = match op {
            // Copying a file onto itself would truncate it; renaming is a no-op.
            _ if dest == path => {
                debug!("name already clean; nothing to do");
                ActionTaken::Skipped(SkipReason::Unchanged)
            }
            Operation::Copy => {
                let res = copy_file(Path::new(path), Path::new(&dest))?;
                info!(src = path, dest = %dest, bytes = res.bytes, "copied file");
                ActionTaken::Copied
            }
            Operation::Rename => {
                rename_file(Path::new(path), Path::new(&dest))?;
                info!(src = path, dest = %dest, "renamed file");
                ActionTaken::Renamed
            }
        };

        if self.options.verbose {
            self.emit(&op.done_line(path, &dest));
        }

        Ok(OperationOutcome::done(path, dest, action))
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = self.console.report(line) {
            warn!(error = %e, "failed to write report line");
        }
    }
}
