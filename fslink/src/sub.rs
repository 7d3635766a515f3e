//! Subtree views that keep link support.
//!
//! A [`SubView`] presents one directory of another filesystem as a root of
//! its own. Every call validates the relative name, rebases it onto the
//! view's directory, delegates, and then rewrites the path on any returned
//! error so the caller only ever sees paths relative to the view.
//!
//! Unlike a plain subtree wrapper, a `SubView` implements
//! [`ReadLinkFs`], forwarding to [`read_link`](crate::read_link) on the
//! underlying filesystem, so links stay readable however deeply views are
//! nested.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::fs::{DirEntry, File, FileInfo, FileSystem, ReadLinkFs, SubFs};
use crate::path::PathName;
use crate::readlink;

/// Returns a view of `fsys` rooted at `dir`.
///
/// - `.` returns `fsys` itself (the same `Arc`).
/// - Filesystems implementing [`SubFs`] build their own view.
/// - Anything else is wrapped in a [`SubView`].
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] tagged `sub` if `dir` is not a valid path,
/// and any error from a native [`SubFs`] implementation.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use fslink::fs::FileSystem;
/// use fslink::memfs::{MapFile, MapFs};
///
/// let fsys: Arc<dyn FileSystem> = Arc::new(
///     MapFs::new()
///         .with("srv/www/index.html", MapFile::new("<html>"))
///         .with("srv/www/current", MapFile::symlink("index.html")),
/// );
///
/// let www = fslink::sub(&fsys, "srv/www").unwrap();
/// assert_eq!(www.read_file("index.html").unwrap(), b"<html>");
/// assert_eq!(fslink::read_link(&www, "current").unwrap(), "index.html");
///
/// let err = www.open("missing").err().unwrap();
/// assert_eq!(err.path(), Some("missing"));
///
/// assert!(Arc::ptr_eq(&fslink::sub(&fsys, ".").unwrap(), &fsys));
/// ```
pub fn sub(fsys: &Arc<dyn FileSystem>, dir: &str) -> Result<Arc<dyn FileSystem>> {
    let dir = PathName::parse("sub", dir)?;
    if dir.is_root() {
        return Ok(Arc::clone(fsys));
    }
    if let Some(native) = Arc::clone(fsys).as_sub_fs() {
        log::debug!("sub {dir}: using native subtree of {}", fsys.kind());
        return native.sub(dir.as_str());
    }
    Ok(Arc::new(SubView {
        fsys: Arc::clone(fsys),
        dir,
    }))
}

/// A filesystem rooted at a directory of another filesystem.
///
/// Built by [`sub`]. Nested views flatten: a view of a view wraps the
/// original filesystem with the combined directory.
pub struct SubView {
    fsys: Arc<dyn FileSystem>,
    dir: PathName,
}

impl SubView {
    /// The directory of the underlying filesystem this view is rooted at.
    #[must_use]
    pub fn dir(&self) -> &str {
        self.dir.as_str()
    }

    /// The underlying filesystem.
    #[must_use]
    pub fn inner(&self) -> &Arc<dyn FileSystem> {
        &self.fsys
    }

    /// Maps `name` to the fully qualified `dir/name`.
    fn full_name(&self, op: &'static str, name: &str) -> Result<String> {
        let name = PathName::parse(op, name)?;
        Ok(self.dir.join(&name).into_string())
    }

    /// Shortens paths reported by the underlying filesystem to view-relative
    /// ones; paths outside the view are left alone.
    fn fix_err(&self, mut err: Error) -> Error {
        let short = err
            .path()
            .and_then(|path| self.dir.strip(path))
            .map(str::to_string);
        if let Some(short) = short {
            err.set_path(short);
        }
        err
    }
}

impl FileSystem for SubView {
    fn open(&self, name: &str) -> Result<Box<dyn File>> {
        let full = self.full_name("open", name)?;
        self.fsys.open(&full).map_err(|e| self.fix_err(e))
    }

    fn stat(&self, name: &str) -> Result<FileInfo> {
        let full = self.full_name("stat", name)?;
        self.fsys.stat(&full).map_err(|e| self.fix_err(e))
    }

    fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        let full = self.full_name("read", name)?;
        self.fsys.read_file(&full).map_err(|e| self.fix_err(e))
    }

    fn read_dir(&self, name: &str) -> Result<Vec<DirEntry>> {
        let full = self.full_name("read", name)?;
        self.fsys.read_dir(&full).map_err(|e| self.fix_err(e))
    }

    fn kind(&self) -> &'static str {
        "SubView"
    }

    fn as_read_link(&self) -> Option<&dyn ReadLinkFs> {
        Some(self)
    }

    fn as_sub_fs(self: Arc<Self>) -> Option<Arc<dyn SubFs>> {
        Some(self)
    }
}

impl ReadLinkFs for SubView {
    fn read_link(&self, name: &str) -> Result<String> {
        let full = self.full_name("readlink", name)?;
        readlink::read_link(&self.fsys, &full).map_err(|e| self.fix_err(e))
    }
}

impl SubFs for SubView {
    fn sub(self: Arc<Self>, dir: &str) -> Result<Arc<dyn FileSystem>> {
        if dir == "." {
            return Ok(self);
        }
        let dir = PathName::parse("sub", dir)?;
        Ok(Arc::new(SubView {
            fsys: Arc::clone(&self.fsys),
            dir: self.dir.join(&dir),
        }))
    }
}
