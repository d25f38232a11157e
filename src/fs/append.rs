//! Locked append writes for inigen.
//!
//! The generated INI file is written exactly once, after every answer has been
//! collected. The write opens the target in append mode (creating it if
//! needed), takes an exclusive advisory lock on the handle, writes the whole
//! buffer, and syncs it to disk. The lock is released when the handle drops.
//!
//! # Notes
//!
//! - Parent directories are never created; a missing parent is a write error.
//! - Advisory locks only exclude other processes that also lock the file.
//! - Because the caller has already checked that the target does not exist,
//!   appending is equivalent to creating in the common case.

use crate::error::{GeneratorError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Append `content` to `path` while holding an exclusive lock on it.
///
/// # Returns
///
/// * `Ok(usize)` - Number of bytes written
/// * `Err(GeneratorError::Write)` - Open, lock, write, or sync failed, or
///   `content` was empty
pub fn append_locked<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<usize> {
    let path = path.as_ref();

    write_locked(path, content).map_err(|source| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_locked(path: &Path, content: &[u8]) -> io::Result<usize> {
    if content.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "refusing to write an empty file",
        ));
    }

    let mut file = open_append(path)?;

    file.lock()?;
    debug!(path = %path.display(), "acquired exclusive lock");

    file.write_all(content)?;
    file.sync_all()?;

    Ok(content.len())
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
