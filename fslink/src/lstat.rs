//! Link-aware metadata by directory scanning.
//!
//! [`FileSystem`] has no way to stat an entry without following it, so the
//! only place a link's own metadata is visible is the listing of the
//! directory that contains it. [`lstat`] opens that directory and scans it.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::fs::{FileInfo, FileSystem};
use crate::path::PathName;

/// Number of entries requested per directory read.
pub const LSTAT_BATCH_SIZE: usize = 100;

/// Returns metadata for `name` without following it if it is a link.
///
/// For the root (`.`) this is exactly [`FileSystem::stat`]. For anything else
/// the parent directory is opened and listed in batches of
/// [`LSTAT_BATCH_SIZE`] until an entry with the same base name turns up; that
/// entry's own metadata is returned, link bit included.
///
/// # Cost
///
/// Each call is linear in the number of entries preceding `name` in its
/// directory. Callers doing many lookups in one large directory should list
/// it once with [`FileSystem::read_dir`] instead.
///
/// # Errors
///
/// - [`Error::InvalidPath`] if `name` is not a valid path.
/// - Any error from opening the parent directory.
/// - [`Error::Unsupported`] if the opened parent cannot be listed.
/// - [`Error::NotFound`] if the listing ends without a match.
/// - The cause of any enumeration failure, re-tagged `lstat` on `name`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use fslink::fs::{FileMode, FileSystem};
/// use fslink::memfs::{MapFile, MapFs};
///
/// let fsys: Arc<dyn FileSystem> = Arc::new(
///     MapFs::new()
///         .with("file", MapFile::new("data").with_mode(FileMode::file(0o600)))
///         .with("link", MapFile::symlink("file")),
/// );
///
/// let info = fslink::lstat(&fsys, "link").unwrap();
/// assert!(info.is_symlink());
///
/// let followed = fsys.stat("link").unwrap();
/// assert!(!followed.is_symlink());
/// ```
pub fn lstat(fsys: &Arc<dyn FileSystem>, name: &str) -> Result<FileInfo> {
    let path = PathName::parse("lstat", name)?;
    if path.is_root() {
        return fsys.stat(path.as_str());
    }

    let parent = path.parent();
    // Dropped on every return below.
    let mut file = fsys.open(parent.as_str())?;
    let Some(dir) = file.as_read_dir() else {
        return Err(Error::unsupported(
            "lstat",
            name,
            format!("directory {parent} of {} cannot be listed", fsys.kind()),
        ));
    };

    let wanted = path.base();
    let mut scanned = 0usize;
    loop {
        let batch = dir
            .read_dir(LSTAT_BATCH_SIZE)
            .map_err(|e| e.with_context("lstat", name))?;
        scanned += batch.entries.len();
        if let Some(entry) = batch.entries.into_iter().find(|e| e.name() == wanted) {
            log::debug!("lstat {name}: found after scanning {scanned} entries of {parent}");
            return Ok(entry.into_info());
        }
        if batch.exhausted {
            log::debug!("lstat {name}: not among {scanned} entries of {parent}");
            return Err(Error::not_found("lstat", name));
        }
    }
}
