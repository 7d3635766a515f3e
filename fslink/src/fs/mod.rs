//! Filesystem traits and optional capabilities.
//!
//! [`FileSystem`] is the base contract every host implements: open a path,
//! and (through default methods built on `open`) stat it, read it, or list
//! it. Everything beyond that is an optional capability that callers
//! discover at runtime:
//!
//! | Capability      | Query                          | Used by                      |
//! |-----------------|--------------------------------|------------------------------|
//! | [`ReadLinkFs`]  | [`FileSystem::as_read_link`]   | [`read_link`](crate::read_link) |
//! | [`SubFs`]       | [`FileSystem::as_sub_fs`]      | [`sub`](crate::sub())        |
//! | [`ReadDirFile`] | [`File::as_read_dir`]          | [`lstat`](crate::lstat())    |
//!
//! Each query returns `None` unless the implementation opts in.
//!
//! All paths passed to these traits are rooted relative paths (see
//! [`crate::path`]). Implementations report failures as path-scoped
//! [`Error`]s so wrappers can rewrite the path.

mod info;

use std::io::Read;
use std::sync::Arc;

use crate::error::{Error, Result};

pub use info::{DirBatch, DirEntry, FileInfo, FileMode};

/// An open file or directory.
///
/// Dropping the handle releases it.
pub trait File: Read + Send {
    /// Metadata of the opened file.
    ///
    /// # Errors
    ///
    /// Returns a host error if the metadata cannot be read.
    fn stat(&self) -> Result<FileInfo>;

    /// Capability query for bounded directory enumeration.
    fn as_read_dir(&mut self) -> Option<&mut dyn ReadDirFile> {
        None
    }
}

/// An open directory that can be listed in batches.
pub trait ReadDirFile: File {
    /// Returns up to `n` further entries, or every remaining entry when `n`
    /// is zero.
    ///
    /// Successive calls continue where the previous one stopped. The batch
    /// reports [`DirBatch::exhausted`] once nothing remains.
    ///
    /// # Errors
    ///
    /// Returns a host error if enumeration fails.
    fn read_dir(&mut self, n: usize) -> Result<DirBatch>;
}

/// A hierarchical, read-only source of files.
pub trait FileSystem: Send + Sync {
    /// Opens `name`, following symbolic links.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for invalid names, and a host error if
    /// the file cannot be opened.
    fn open(&self, name: &str) -> Result<Box<dyn File>>;

    /// Metadata of the file `name` resolves to.
    ///
    /// # Errors
    ///
    /// Returns any error from [`FileSystem::open`] or [`File::stat`].
    fn stat(&self, name: &str) -> Result<FileInfo> {
        let file = self.open(name)?;
        file.stat()
    }

    /// Reads the whole file `name`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`FileSystem::open`], or an I/O error tagged
    /// `read` if reading fails.
    fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        let mut file = self.open(name)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| Error::io("read", name, e))?;
        Ok(data)
    }

    /// Lists the directory `name`, sorted by entry name.
    ///
    /// # Errors
    ///
    /// Returns any error from [`FileSystem::open`] or enumeration, and
    /// [`Error::Unsupported`] if the opened file cannot be listed.
    fn read_dir(&self, name: &str) -> Result<Vec<DirEntry>> {
        let mut file = self.open(name)?;
        let Some(dir) = file.as_read_dir() else {
            return Err(Error::unsupported(
                "readdir",
                name,
                "not implemented by the opened file",
            ));
        };
        let mut entries = dir.read_dir(0)?.entries;
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(entries)
    }

    /// A name for the concrete implementation, used in diagnostics.
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Capability query for reading symbolic links.
    fn as_read_link(&self) -> Option<&dyn ReadLinkFs> {
        None
    }

    /// Capability query for native subtree views.
    fn as_sub_fs(self: Arc<Self>) -> Option<Arc<dyn SubFs>> {
        None
    }
}

/// A filesystem that can return the raw text of symbolic links.
pub trait ReadLinkFs: Send + Sync {
    /// Returns the unvalidated target text stored in the link `name`.
    ///
    /// Callers should go through [`read_link`](crate::read_link), which also
    /// validates the text.
    ///
    /// # Errors
    ///
    /// Returns a host error if `name` is missing or not a link.
    fn read_link(&self, name: &str) -> Result<String>;
}

/// A filesystem that builds its own subtree views.
pub trait SubFs: Send + Sync {
    /// Returns a view rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for invalid directories.
    fn sub(self: Arc<Self>, dir: &str) -> Result<Arc<dyn FileSystem>>;
}
