//! Atomic rename helper.
//! - A single rename(2); no copy+delete fallback across filesystems.
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs;
use std::path::Path;

use super::helpers::io_error_with_help;
use crate::errors::SpacermError;

pub fn rename_file(src: &Path, dst: &Path) -> Result<(), SpacermError> {
    fs::rename(src, dst).map_err(io_error_with_help("rename", src))?;

    #[cfg(unix)]
    {
        let parent = match dst.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        // Ignore fsync errors to avoid turning a successful rename into a failure.
        let _ = crate::platform::fsync_dir(parent);
    }

    Ok(())
}
