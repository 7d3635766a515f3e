//! Common test utilities for integration tests.
//!
//! Hand-written filesystem doubles: a directory whose listing is scripted
//! (entry count, injected failure, missing listing capability) and which
//! counts how many handles it opened and how many were released.

#![allow(dead_code)]

use std::io::{self, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use fslink::fs::{DirBatch, DirEntry, File, FileInfo, FileMode, FileSystem, ReadDirFile, SubFs};
use fslink::memfs::{MapFile, MapFs};
use fslink::{Error, Result};

/// Counters shared between a [`ScriptedFs`] and the handles it opens.
#[derive(Debug, Default)]
pub struct Stats {
    opened: AtomicUsize,
    released: AtomicUsize,
    batches: Mutex<Vec<usize>>,
}

impl Stats {
    /// Handles opened so far.
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Handles dropped so far.
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Number of entries returned by each `read_dir` call, in order.
    pub fn batches(&self) -> Vec<usize> {
        self.batches.lock().unwrap().clone()
    }

    /// Records one served batch.
    fn record(&self, returned: usize) {
        self.batches.lock().unwrap().push(returned);
    }
}

/// A single directory, `dir`, holding `entries` regular files named
/// `entry-000`, `entry-001`, ... in that order.
#[derive(Debug)]
pub struct ScriptedFs {
    dir: String,
    entries: usize,
    fail_after: Option<usize>,
    listable: bool,
    stats: Arc<Stats>,
}

impl ScriptedFs {
    /// A listable directory with `entries` entries.
    pub fn new(dir: &str, entries: usize) -> Self {
        Self {
            dir: dir.to_string(),
            entries,
            fail_after: None,
            listable: true,
            stats: Arc::new(Stats::default()),
        }
    }

    /// Enumeration fails with a permission error once `batches` batches
    /// were served.
    pub fn failing_after(mut self, batches: usize) -> Self {
        self.fail_after = Some(batches);
        self
    }

    /// The opened directory does not offer batched listing.
    pub fn unlistable(mut self) -> Self {
        self.listable = false;
        self
    }

    /// The shared counters.
    pub fn stats(&self) -> Arc<Stats> {
        Arc::clone(&self.stats)
    }

    /// Name of the `i`th entry.
    pub fn entry_name(i: usize) -> String {
        format!("entry-{i:03}")
    }

    /// Wraps `self` as a shared handle, returning the counters too.
    pub fn into_handle(self) -> (Arc<dyn FileSystem>, Arc<Stats>) {
        let stats = self.stats();
        (Arc::new(self), stats)
    }
}

impl FileSystem for ScriptedFs {
    fn open(&self, name: &str) -> Result<Box<dyn File>> {
        if name != self.dir {
            return Err(Error::not_found("open", name));
        }
        self.stats.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedDir {
            name: self.dir.clone(),
            remaining: (0..self.entries).map(ScriptedFs::entry_name).collect(),
            served: 0,
            fail_after: self.fail_after,
            listable: self.listable,
            stats: Arc::clone(&self.stats),
        }))
    }

    fn kind(&self) -> &'static str {
        "ScriptedFs"
    }
}

struct ScriptedDir {
    name: String,
    remaining: Vec<String>,
    served: usize,
    fail_after: Option<usize>,
    listable: bool,
    stats: Arc<Stats>,
}

impl Read for ScriptedDir {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::InvalidInput, "is a directory"))
    }
}

impl File for ScriptedDir {
    fn stat(&self) -> Result<FileInfo> {
        Ok(FileInfo::new(&self.name, FileMode::dir(0o755), 0, None))
    }

    fn as_read_dir(&mut self) -> Option<&mut dyn ReadDirFile> {
        if self.listable {
            Some(self)
        } else {
            None
        }
    }
}

impl ReadDirFile for ScriptedDir {
    fn read_dir(&mut self, n: usize) -> Result<DirBatch> {
        if self.fail_after == Some(self.served) {
            return Err(Error::io(
                "readdir",
                self.name.as_str(),
                io::Error::from(io::ErrorKind::PermissionDenied),
            ));
        }
        self.served += 1;
        let take = if n == 0 {
            self.remaining.len()
        } else {
            n.min(self.remaining.len())
        };
        let entries: Vec<DirEntry> = self
            .remaining
            .drain(..take)
            .map(|name| DirEntry::new(FileInfo::new(name, FileMode::file(0o644), 0, None)))
            .collect();
        self.stats.record(entries.len());
        if self.remaining.is_empty() {
            Ok(DirBatch::last(entries))
        } else {
            Ok(DirBatch::more(entries))
        }
    }
}

impl Drop for ScriptedDir {
    fn drop(&mut self) {
        self.stats.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Forwards `open` to an inner filesystem but offers no capabilities.
pub struct Plain(pub Arc<dyn FileSystem>);

impl FileSystem for Plain {
    fn open(&self, name: &str) -> Result<Box<dyn File>> {
        self.0.open(name)
    }
}

/// A filesystem with its own subtree implementation; records the
/// directories it was asked for.
pub struct NativeSub {
    pub inner: Arc<dyn FileSystem>,
    pub requested: Mutex<Vec<String>>,
}

impl NativeSub {
    pub fn new(inner: Arc<dyn FileSystem>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            requested: Mutex::new(Vec::new()),
        })
    }
}

impl FileSystem for NativeSub {
    fn open(&self, name: &str) -> Result<Box<dyn File>> {
        self.inner.open(name)
    }

    fn kind(&self) -> &'static str {
        "NativeSub"
    }

    fn as_sub_fs(self: Arc<Self>) -> Option<Arc<dyn SubFs>> {
        Some(self)
    }
}

impl SubFs for NativeSub {
    fn sub(self: Arc<Self>, dir: &str) -> Result<Arc<dyn FileSystem>> {
        self.requested.lock().unwrap().push(dir.to_string());
        fslink::sub(&self.inner, dir)
    }
}

/// A small tree with links at several depths.
pub fn site() -> Arc<dyn FileSystem> {
    Arc::new(
        MapFs::new()
            .with("srv/www/index.html", MapFile::new("<html>"))
            .with("srv/www/current", MapFile::symlink("releases/v2"))
            .with("srv/www/releases/v1/app", MapFile::new("v1"))
            .with("srv/www/releases/v2/app", MapFile::new("v2"))
            .with("srv/www/releases/v2/shared", MapFile::symlink("../../shared"))
            .with("srv/www/shared/data", MapFile::new("shared"))
            .with("srv/www/bad", MapFile::symlink("/etc/passwd"))
            .with("srv/logs/today", MapFile::new("log")),
    )
}
