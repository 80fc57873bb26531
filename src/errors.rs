//! Typed error definitions for spacerm.
//! Separates per-file naming failures (skip and continue) from filesystem
//! failures that abort the whole batch.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::describe_io_error;

#[derive(Debug, Error)]
pub enum SpacermError {
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("file error: {} is not a regular file", .0.display())]
    NotRegularFile(PathBuf),

    #[error("access denied on {}: {context}", .path.display())]
    AccessDenied { path: PathBuf, context: String },

    #[error("{}", describe_io_error(.op, .path, .error))]
    Io {
        op: &'static str,
        path: PathBuf,
        error: io::Error,
    },
}

impl SpacermError {
    pub(crate) fn invalid_path(path: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason,
        }
    }

    /// Naming problems only skip the offending file; everything else stops the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SpacermError::InvalidPath { .. })
    }

    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u8 {
        match self {
            SpacermError::InvalidPath { .. } => 10,
            SpacermError::NotRegularFile(_) => 20,
            SpacermError::AccessDenied { .. } => 21,
            SpacermError::Io { .. } => 30,
        }
    }

    /// Short machine-friendly name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            SpacermError::InvalidPath { .. } => "invalid_path",
            SpacermError::NotRegularFile(_) => "not_regular_file",
            SpacermError::AccessDenied { .. } => "access_denied",
            SpacermError::Io { .. } => "io",
        }
    }
}
