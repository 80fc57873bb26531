//! Platform-specific helpers.
//! This module hides OS differences (Unix/other) behind a uniform API so
//! the rest of the codebase can remain platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{advise_sequential, check_access, fsync_dir, open_log_file_secure_append};

#[cfg(not(unix))]
pub use windows::{advise_sequential, check_access, fsync_dir, open_log_file_secure_append};

/// Access mode probed by [`check_access`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    ReadWrite,
}
