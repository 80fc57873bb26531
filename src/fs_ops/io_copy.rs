//! Streaming copy that reproduces the source's permission bits.
//!
//! - The destination is created (or truncated) and its mode set to the
//!   source's mode exactly, independent of the process umask.
//! - Data is streamed through a single fixed buffer; every write must consume
//!   the whole chunk produced by the preceding read.
//! - On failure the partially written destination is left in place.
//!
//! Snapshot semantics: the source is read once from start to EOF; bytes
//! appended concurrently after EOF was observed are not included.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

use super::helpers::io_error_with_help;
use crate::errors::SpacermError;
use crate::platform::advise_sequential;

/// Default copy buffer size (128 KiB).
pub const IO_BUF_SIZE: usize = 128 * 1024;

/// Result of a streaming copy operation.
#[derive(Debug, Clone, Copy)]
pub struct CopyResult {
    /// Total bytes copied from source to destination.
    pub bytes: u64,
    /// Size of the buffer used for copying.
    pub buf_size: usize,
}

/// Copy `src` -> `dst` with the default buffer size.
pub fn copy_file(src: &Path, dst: &Path) -> Result<CopyResult, SpacermError> {
    copy_file_with_buffer(src, dst, IO_BUF_SIZE)
}

/// Copy `src` -> `dst` using a `buf_size` byte buffer.
pub fn copy_file_with_buffer(
    src: &Path,
    dst: &Path,
    buf_size: usize,
) -> Result<CopyResult, SpacermError> {
    let buf_size = buf_size.max(1);

    let mut src_f = File::open(src).map_err(io_error_with_help("open", src))?;
    let perms = src_f
        .metadata()
        .map_err(io_error_with_help("stat", src))?
        .permissions();

    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        opts.mode(perms.mode() & 0o7777);
    }
    let mut dst_f = opts.open(dst).map_err(io_error_with_help("open", dst))?;

    // The create mode is filtered through the umask and ignored for an
    // existing file, so apply the bits explicitly.
    dst_f
        .set_permissions(perms)
        .map_err(io_error_with_help("chmod", dst))?;

    advise_sequential(&src_f);

    let bytes = stream(&mut src_f, &mut dst_f, buf_size, src, dst)?;
    debug!(src = %src.display(), dst = %dst.display(), bytes, buf_size, "copy finished");
    Ok(CopyResult { bytes, buf_size })
}

fn stream(
    reader: &mut impl Read,
    writer: &mut impl Write,
    buf_size: usize,
    src: &Path,
    dst: &Path,
) -> Result<u64, SpacermError> {
    let mut buf = vec![0u8; buf_size];
    let mut total: u64 = 0;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(io_error_with_help("read", src)(e)),
        };
        writer
            .write_all(&buf[..n])
            .map_err(io_error_with_help("write", dst))?;
        total += n as u64;
    }
    writer.flush().map_err(io_error_with_help("write", dst))?;
    Ok(total)
}
