//! Pre-flight checks before a file is renamed or copied.
//!
//! Every check hits the filesystem afresh; nothing is cached between files.
//! The file can still change between these checks and the mutation itself.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::SpacermError;
use crate::fs_ops::io_error_with_help;
use crate::naming::split_path;
use crate::platform::{check_access, Access};

/// Verify that `path` is a regular file we can read, in a directory we can
/// read and write. Symlinks are followed, as with stat(2).
pub fn check_permissions(path: &str) -> Result<(), SpacermError> {
    let file = Path::new(path);
    let meta = fs::metadata(file).map_err(io_error_with_help("stat", file))?;
    if !meta.is_file() {
        return Err(SpacermError::NotRegularFile(file.to_path_buf()));
    }

    check_access(file, Access::Read).map_err(|e| SpacermError::AccessDenied {
        path: file.to_path_buf(),
        context: format!("file is not readable: {e}"),
    })?;

    // A regular file always has a base name, so the split cannot fail here.
    let dir = Path::new(split_path(path)?.containing_dir());
    check_access(dir, Access::ReadWrite).map_err(|e| SpacermError::AccessDenied {
        path: dir.to_path_buf(),
        context: format!("containing directory is not readable and writable: {e}"),
    })?;

    debug!(path, dir = %dir.display(), "permission checks passed");
    Ok(())
}
