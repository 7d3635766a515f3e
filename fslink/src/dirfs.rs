//! A filesystem backed by a directory of the host operating system.
//!
//! [`DirFs`] exposes the tree below a root directory through the
//! [`FileSystem`] traits. Opening follows symbolic links the way the OS
//! does; directory listings report each entry's own metadata, and
//! [`ReadLinkFs::read_link`] returns the text the OS stores in a link.
//!
//! Names are validated as rooted relative paths before they reach the OS,
//! but links are followed by the OS itself, so a link pointing outside the
//! root is still followed. Use [`read_link`](crate::read_link) and
//! [`lstat`](crate::lstat()) where that matters.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::{DirBatch, DirEntry, File, FileInfo, FileMode, FileSystem, ReadDirFile, ReadLinkFs};
use crate::path::PathName;

/// A filesystem rooted at a host directory.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use fslink::dirfs::DirFs;
/// use fslink::fs::FileSystem;
///
/// let fsys: Arc<dyn FileSystem> = Arc::new(DirFs::new("/srv/www"));
/// let info = fslink::lstat(&fsys, "current").unwrap();
/// if info.is_symlink() {
///     println!("-> {}", fslink::read_link(&fsys, "current").unwrap());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DirFs {
    root: PathBuf,
}

impl DirFs {
    /// Creates a filesystem rooted at `root`. The directory is not checked
    /// until the first call.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The host directory this filesystem is rooted at.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn os_path(&self, op: &'static str, name: &str) -> Result<(PathName, PathBuf)> {
        let path = PathName::parse(op, name)?;
        let os = if path.is_root() {
            self.root.clone()
        } else {
            self.root.join(path.as_str())
        };
        Ok((path, os))
    }
}

impl FileSystem for DirFs {
    fn open(&self, name: &str) -> Result<Box<dyn File>> {
        let (path, os) = self.os_path("open", name)?;
        let meta = fs::metadata(&os).map_err(|e| Error::io("open", name, e))?;
        let info = info_from_metadata(path.base(), &meta);
        if meta.is_dir() {
            let iter = fs::read_dir(&os).map_err(|e| Error::io("open", name, e))?;
            Ok(Box::new(OsDir {
                name: path.into_string(),
                info,
                iter,
            }))
        } else {
            let file = fs::File::open(&os).map_err(|e| Error::io("open", name, e))?;
            Ok(Box::new(OsFile { info, file }))
        }
    }

    fn stat(&self, name: &str) -> Result<FileInfo> {
        let (path, os) = self.os_path("stat", name)?;
        let meta = fs::metadata(&os).map_err(|e| Error::io("stat", name, e))?;
        Ok(info_from_metadata(path.base(), &meta))
    }

    fn kind(&self) -> &'static str {
        "DirFs"
    }

    fn as_read_link(&self) -> Option<&dyn ReadLinkFs> {
        Some(self)
    }
}

impl ReadLinkFs for DirFs {
    fn read_link(&self, name: &str) -> Result<String> {
        let (_, os) = self.os_path("readlink", name)?;
        let target = fs::read_link(&os).map_err(|e| Error::io("readlink", name, e))?;
        let target = target.into_os_string().into_string().map_err(|_| {
            Error::io(
                "readlink",
                name,
                io::Error::new(io::ErrorKind::InvalidData, "link target is not UTF-8"),
            )
        })?;
        if cfg!(windows) {
            return Ok(target.replace('\\', "/"));
        }
        Ok(target)
    }
}

/// Converts host metadata, which must not have followed a final link if the
/// caller wants link metadata.
fn info_from_metadata(name: &str, meta: &fs::Metadata) -> FileInfo {
    let file_type = meta.file_type();
    let mut mode = FileMode::from_bits(permission_bits(meta));
    if file_type.is_dir() {
        mode |= FileMode::DIR;
    } else if file_type.is_symlink() {
        mode |= FileMode::SYMLINK;
    }
    FileInfo::new(name, mode, meta.len(), meta.modified().ok())
}

#[cfg(unix)]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}

struct OsFile {
    info: FileInfo,
    file: fs::File,
}

impl Read for OsFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl File for OsFile {
    fn stat(&self) -> Result<FileInfo> {
        Ok(self.info.clone())
    }
}

struct OsDir {
    name: String,
    info: FileInfo,
    iter: fs::ReadDir,
}

impl OsDir {
    /// Converts a host entry; `None` for entries that vanished after the
    /// listing was read or whose names are not UTF-8.
    fn entry(&self, entry: fs::DirEntry) -> Result<Option<DirEntry>> {
        let Ok(name) = entry.file_name().into_string() else {
            log::debug!("readdir {}: skipping non-UTF-8 entry {:?}", self.name, entry.file_name());
            return Ok(None);
        };
        // DirEntry::metadata does not traverse symlinks.
        match entry.metadata() {
            Ok(meta) => Ok(Some(DirEntry::new(info_from_metadata(&name, &meta)))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("readdir {}: {name} vanished during listing", self.name);
                Ok(None)
            }
            Err(e) => Err(Error::io("readdir", self.name.as_str(), e)),
        }
    }
}

impl Read for OsDir {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::InvalidInput, "is a directory"))
    }
}

impl File for OsDir {
    fn stat(&self) -> Result<FileInfo> {
        Ok(self.info.clone())
    }

    fn as_read_dir(&mut self) -> Option<&mut dyn ReadDirFile> {
        Some(self)
    }
}

impl ReadDirFile for OsDir {
    fn read_dir(&mut self, n: usize) -> Result<DirBatch> {
        let mut entries = Vec::new();
        while n == 0 || entries.len() < n {
            match self.iter.next() {
                None => return Ok(DirBatch::last(entries)),
                Some(Err(e)) => return Err(Error::io("readdir", self.name.as_str(), e)),
                Some(Ok(entry)) => entries.extend(self.entry(entry)?),
            }
        }
        Ok(DirBatch::more(entries))
    }
}
