//! An in-memory filesystem.
//!
//! [`MapFs`] maps slash-separated paths to [`MapFile`]s. Directories do not
//! need entries of their own: any path that is a prefix of another path is a
//! directory. Symbolic links are entries with the [`FileMode::SYMLINK`] bit
//! whose data is the target text; `open` and `stat` follow them, directory
//! listings and [`read_link`](ReadLinkFs::read_link) do not.
//!
//! # Examples
//!
//! ```
//! use fslink::fs::{FileMode, FileSystem};
//! use fslink::memfs::{MapFile, MapFs};
//!
//! let fsys = MapFs::new()
//!     .with("etc/app.yaml", MapFile::new("port: 80"))
//!     .with("app.yaml", MapFile::symlink("etc/app.yaml"));
//!
//! assert_eq!(fsys.read_file("app.yaml").unwrap(), b"port: 80");
//! assert!(fsys.stat("etc").unwrap().is_dir());
//! ```

use std::collections::BTreeMap;
use std::io::{self, Cursor, Read};
use std::time::SystemTime;

use crate::error::{Error, Result};
use crate::fs::{DirBatch, DirEntry, File, FileInfo, FileMode, FileSystem, ReadDirFile, ReadLinkFs};
use crate::path::{self, PathName};

/// Links followed before `open` gives up.
pub const MAX_LINK_HOPS: usize = 40;

/// Contents and metadata of one [`MapFs`] entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFile {
    data: Vec<u8>,
    mode: FileMode,
    modified: Option<SystemTime>,
}

impl MapFile {
    /// A regular file with permissions `0o644`.
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            mode: FileMode::file(0o644),
            modified: None,
        }
    }

    /// A symbolic link storing `target`, with permissions `0o777`.
    #[must_use]
    pub fn symlink(target: &str) -> Self {
        Self {
            data: target.as_bytes().to_vec(),
            mode: FileMode::symlink(0o777),
            modified: None,
        }
    }

    /// An explicit, empty directory with permissions `0o755`.
    #[must_use]
    pub fn dir() -> Self {
        Self {
            data: Vec::new(),
            mode: FileMode::dir(0o755),
            modified: None,
        }
    }

    /// Replaces the mode.
    #[must_use]
    pub fn with_mode(mut self, mode: FileMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the modification time.
    #[must_use]
    pub fn with_modified(mut self, modified: SystemTime) -> Self {
        self.modified = Some(modified);
        self
    }

    fn info(&self, name: &str) -> FileInfo {
        FileInfo::new(name, self.mode, self.data.len() as u64, self.modified)
    }
}

/// A filesystem held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MapFs {
    files: BTreeMap<String, MapFile>,
}

impl MapFs {
    /// An empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, file: MapFile) -> Self {
        self.insert(name, file);
        self
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, name: impl Into<String>, file: MapFile) {
        self.files.insert(name.into(), file);
    }

    /// Number of explicit entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether there are no explicit entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn is_implicit_dir(&self, name: &str) -> bool {
        if name == "." {
            return true;
        }
        let prefix = format!("{name}/");
        self.files
            .range(prefix.clone()..)
            .next()
            .is_some_and(|(key, _)| key.starts_with(&prefix))
    }

    /// Resolves every symbolic link along `name`.
    fn resolve(&self, op: &'static str, name: &PathName) -> Result<String> {
        let mut pending: Vec<String> = name
            .as_str()
            .split('/')
            .rev()
            .map(str::to_string)
            .collect();
        let mut resolved: Vec<String> = Vec::new();
        let mut hops = 0;

        while let Some(segment) = pending.pop() {
            match segment.as_str() {
                "" | "." => continue,
                ".." => {
                    if resolved.pop().is_none() {
                        return Err(Error::not_found(op, name.as_str()));
                    }
                    continue;
                }
                _ => resolved.push(segment),
            }

            let current = resolved.join("/");
            match self.files.get(&current) {
                Some(file) if file.mode.is_symlink() => {
                    hops += 1;
                    if hops > MAX_LINK_HOPS {
                        return Err(Error::io(
                            op,
                            name.as_str(),
                            io::Error::other("too many levels of symbolic links"),
                        ));
                    }
                    let target = std::str::from_utf8(&file.data).map_err(|_| {
                        Error::io(
                            op,
                            name.as_str(),
                            io::Error::new(io::ErrorKind::InvalidData, "link target is not UTF-8"),
                        )
                    })?;
                    if target.starts_with('/') {
                        return Err(Error::io(
                            op,
                            name.as_str(),
                            io::Error::new(io::ErrorKind::InvalidInput, "absolute link target"),
                        ));
                    }
                    resolved.pop();
                    pending.extend(target.split('/').rev().map(str::to_string));
                }
                Some(_) => {}
                None if self.is_implicit_dir(&current) => {}
                None => return Err(Error::not_found(op, name.as_str())),
            }
        }

        if resolved.is_empty() {
            Ok(".".to_string())
        } else {
            Ok(resolved.join("/"))
        }
    }

    /// Entries directly below the resolved directory `dir`, unfollowed.
    fn children(&self, dir: &str) -> Vec<DirEntry> {
        let prefix = if dir == "." {
            String::new()
        } else {
            format!("{dir}/")
        };
        let mut found: BTreeMap<&str, FileInfo> = BTreeMap::new();
        for (key, file) in self.files.range(prefix.clone()..) {
            let Some(rest) = key.strip_prefix(&prefix) else {
                break;
            };
            if rest.is_empty() || rest == "." {
                continue;
            }
            match rest.split_once('/') {
                None => {
                    found.insert(rest, file.info(rest));
                }
                Some((child, _)) => {
                    found
                        .entry(child)
                        .or_insert_with(|| synthesized_dir(child));
                }
            }
        }
        found.into_values().map(DirEntry::new).collect()
    }
}

fn synthesized_dir(name: &str) -> FileInfo {
    FileInfo::new(name, FileMode::dir(0o555), 0, None)
}

impl FileSystem for MapFs {
    fn open(&self, name: &str) -> Result<Box<dyn File>> {
        let path = PathName::parse("open", name)?;
        let resolved = self.resolve("open", &path)?;
        let display_name = path.base();

        match self.files.get(&resolved) {
            Some(file) if !file.mode.is_dir() => Ok(Box::new(MapHandle {
                info: file.info(display_name),
                data: Cursor::new(file.data.clone()),
            })),
            explicit => {
                let info = explicit.map_or_else(
                    || synthesized_dir(display_name),
                    |dir| dir.info(display_name),
                );
                Ok(Box::new(MapDir {
                    info,
                    entries: self.children(&resolved),
                    offset: 0,
                }))
            }
        }
    }

    fn kind(&self) -> &'static str {
        "MapFs"
    }

    fn as_read_link(&self) -> Option<&dyn ReadLinkFs> {
        Some(self)
    }
}

impl ReadLinkFs for MapFs {
    fn read_link(&self, name: &str) -> Result<String> {
        let path = PathName::parse("readlink", name)?;
        if path.is_root() {
            return Err(not_a_link(name));
        }
        let parent = self.resolve("readlink", &path.parent())?;
        let key = path::join(&parent, path.base());
        match self.files.get(&key) {
            Some(file) if file.mode.is_symlink() => String::from_utf8(file.data.clone())
                .map_err(|_| {
                    Error::io(
                        "readlink",
                        name,
                        io::Error::new(io::ErrorKind::InvalidData, "link target is not UTF-8"),
                    )
                }),
            Some(_) => Err(not_a_link(name)),
            None if self.is_implicit_dir(&key) => Err(not_a_link(name)),
            None => Err(Error::not_found("readlink", name)),
        }
    }
}

fn not_a_link(name: &str) -> Error {
    Error::io(
        "readlink",
        name,
        io::Error::new(io::ErrorKind::InvalidInput, "not a symbolic link"),
    )
}

struct MapHandle {
    info: FileInfo,
    data: Cursor<Vec<u8>>,
}

impl Read for MapHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.data.read(buf)
    }
}

impl File for MapHandle {
    fn stat(&self) -> Result<FileInfo> {
        Ok(self.info.clone())
    }
}

struct MapDir {
    info: FileInfo,
    entries: Vec<DirEntry>,
    offset: usize,
}

impl Read for MapDir {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::InvalidInput, "is a directory"))
    }
}

impl File for MapDir {
    fn stat(&self) -> Result<FileInfo> {
        Ok(self.info.clone())
    }

    fn as_read_dir(&mut self) -> Option<&mut dyn ReadDirFile> {
        Some(self)
    }
}

impl ReadDirFile for MapDir {
    fn read_dir(&mut self, n: usize) -> Result<DirBatch> {
        let remaining = self.entries.len() - self.offset;
        let take = if n == 0 { remaining } else { n.min(remaining) };
        let batch = self.entries[self.offset..self.offset + take].to_vec();
        self.offset += take;
        if self.offset == self.entries.len() {
            Ok(DirBatch::last(batch))
        } else {
            Ok(DirBatch::more(batch))
        }
    }
}
