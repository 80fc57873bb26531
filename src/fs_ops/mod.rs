//! Filesystem mutations: streaming copy and atomic rename.

mod atomic;
mod helpers;
mod io_copy;

pub use atomic::rename_file;
pub use helpers::io_error_with_help;
pub use io_copy::{copy_file, copy_file_with_buffer, CopyResult, IO_BUF_SIZE};

pub(crate) use helpers::describe_io_error;
