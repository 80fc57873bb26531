//! I/O helper utilities.
//!
//! Enriches io::Error with the failing operation, the path involved and an
//! actionable hint, so a fatal diagnostic is useful without a debugger.
//!
//! Usage:
//!   fs::rename(src, dst).map_err(io_error_with_help("rename", src))?;

use std::io;
use std::path::{Path, PathBuf};

use crate::errors::SpacermError;

/// Format a human-friendly message with op/path plus platform-aware hints.
pub(crate) fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            let hint = match code {
                libc::EACCES | libc::EPERM => {
                    Some("permission denied; check ownership and write permissions.")
                }
                libc::EXDEV => Some("cross-filesystem; atomic rename not possible."),
                libc::EBUSY => Some("resource busy; ensure no other process is using it."),
                libc::ENOENT => Some("path not found; verify it exists."),
                libc::ENOTDIR => Some("a directory component is not a directory."),
                libc::EISDIR => Some("destination is a directory."),
                libc::ENOSPC => Some("insufficient space on device."),
                libc::EROFS => Some("read-only filesystem; cannot write here."),
                libc::ELOOP => {
                    Some("too many symbolic link levels (ELOOP); possible symlink cycle.")
                }
                libc::ENAMETOOLONG => Some("filename or path too long; shorten path segments."),
                libc::EMFILE => {
                    Some("process file descriptor limit reached; close files or raise limits.")
                }
                libc::ENFILE => Some("system-wide file table overflow; reduce open files."),
                _ => None,
            };
            if let Some(hint) = hint {
                msg.push_str("; ");
                msg.push_str(hint);
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        let hint = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                Some("permission denied; check ownership and write permissions.")
            }
            io::ErrorKind::NotFound => Some("path not found; verify it exists."),
            io::ErrorKind::AlreadyExists => Some("already exists; remove or choose another name."),
            io::ErrorKind::WriteZero => Some("short write; destination may be full."),
            io::ErrorKind::UnexpectedEof => Some("source shrank while being read."),
            _ => None,
        };
        if let Some(hint) = hint {
            msg.push_str("; ");
            msg.push_str(hint);
        }
    }

    msg
}

/// Returns a closure suitable for `.map_err(...)` that wraps an io::Error
/// into `SpacermError::Io` for the given operation and path.
pub fn io_error_with_help<'a>(
    op: &'static str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> SpacermError + 'a {
    move |error: io::Error| SpacermError::Io {
        op,
        path: PathBuf::from(path),
        error,
    }
}
