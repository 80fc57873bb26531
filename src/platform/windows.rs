//! Non-Unix implementations of platform helpers.
//! There is no access(2); probes fall back to opening the path and to the
//! readonly attribute.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use super::Access;

pub fn check_access(path: &Path, access: Access) -> io::Result<()> {
    let meta = fs::metadata(path)?;
    if meta.is_file() {
        File::open(path)?;
    } else {
        fs::read_dir(path)?;
    }
    if access == Access::ReadWrite && meta.permissions().readonly() {
        return Err(io::Error::from(io::ErrorKind::PermissionDenied));
    }
    Ok(())
}

pub fn advise_sequential(_file: &File) {}

/// Directories cannot be opened for fsync here; renames are flushed by the OS.
pub fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path)
}
