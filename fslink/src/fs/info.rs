//! File metadata types shared by every filesystem implementation.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::time::SystemTime;

/// File type and permission bits.
///
/// The low nine bits are Unix permissions; the type bits sit at the top of
/// the word. A mode with no type bits set describes a regular file.
///
/// # Examples
///
/// ```
/// use fslink::fs::FileMode;
///
/// let mode = FileMode::SYMLINK | FileMode::from_bits(0o666);
/// assert!(mode.is_symlink());
/// assert_eq!(mode.perm(), 0o666);
/// assert_eq!(mode.to_string(), "Lrw-rw-rw-");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FileMode(u32);

impl FileMode {
    /// Directory type bit.
    pub const DIR: Self = Self(1 << 31);
    /// Symbolic link type bit.
    pub const SYMLINK: Self = Self(1 << 27);

    const PERM_MASK: u32 = 0o777;
    const TYPE_MASK: u32 = Self::DIR.0 | Self::SYMLINK.0;

    /// Builds a mode from raw bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// A regular file with the given permissions.
    #[must_use]
    pub const fn file(perm: u32) -> Self {
        Self(perm & Self::PERM_MASK)
    }

    /// A directory with the given permissions.
    #[must_use]
    pub const fn dir(perm: u32) -> Self {
        Self(Self::DIR.0 | (perm & Self::PERM_MASK))
    }

    /// A symbolic link with the given permissions.
    #[must_use]
    pub const fn symlink(perm: u32) -> Self {
        Self(Self::SYMLINK.0 | (perm & Self::PERM_MASK))
    }

    /// The raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The Unix permission bits.
    #[must_use]
    pub const fn perm(self) -> u32 {
        self.0 & Self::PERM_MASK
    }

    /// Only the type bits.
    #[must_use]
    pub const fn file_type(self) -> Self {
        Self(self.0 & Self::TYPE_MASK)
    }

    /// Whether the directory bit is set.
    #[must_use]
    pub const fn is_dir(self) -> bool {
        self.0 & Self::DIR.0 != 0
    }

    /// Whether the symbolic link bit is set.
    #[must_use]
    pub const fn is_symlink(self) -> bool {
        self.0 & Self::SYMLINK.0 != 0
    }

    /// Whether no type bits are set.
    #[must_use]
    pub const fn is_regular(self) -> bool {
        self.0 & Self::TYPE_MASK == 0
    }
}

impl BitOr for FileMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FileMode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_dir() {
            'd'
        } else if self.is_symlink() {
            'L'
        } else {
            '-'
        };
        let mut out = String::with_capacity(10);
        out.push(kind);
        for (i, c) in "rwxrwxrwx".chars().enumerate() {
            if self.0 & (1 << (8 - i)) != 0 {
                out.push(c);
            } else {
                out.push('-');
            }
        }
        f.write_str(&out)
    }
}

impl fmt::Debug for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileMode({self})")
    }
}

/// Metadata for a single entry.
///
/// Depending on where it came from, a `FileInfo` describes either the file a
/// path resolves to (`stat`) or the directory entry itself (`lstat`, and
/// [`DirEntry::info`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    name: String,
    mode: FileMode,
    size: u64,
    modified: Option<SystemTime>,
}

impl FileInfo {
    /// Create new file metadata.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        mode: FileMode,
        size: u64,
        modified: Option<SystemTime>,
    ) -> Self {
        Self {
            name: name.into(),
            mode,
            size,
            modified,
        }
    }

    /// Base name of the entry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mode bits.
    #[must_use]
    pub fn mode(&self) -> FileMode {
        self.mode
    }

    /// Length in bytes; for links, the length of the stored target.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Modification time, if the host tracks one.
    #[must_use]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Shorthand for `self.mode().is_dir()`.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.mode.is_dir()
    }

    /// Shorthand for `self.mode().is_symlink()`.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.mode.is_symlink()
    }
}

/// An entry read from a directory.
///
/// Carries the entry's own metadata, never that of a link's target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    info: FileInfo,
}

impl DirEntry {
    /// Wraps the entry's own metadata.
    #[must_use]
    pub fn new(info: FileInfo) -> Self {
        Self { info }
    }

    /// Base name of the entry.
    #[must_use]
    pub fn name(&self) -> &str {
        self.info.name()
    }

    /// The type bits of the entry's mode.
    #[must_use]
    pub fn file_type(&self) -> FileMode {
        self.info.mode().file_type()
    }

    /// Whether the entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.info.is_dir()
    }

    /// The entry's metadata.
    #[must_use]
    pub fn info(&self) -> &FileInfo {
        &self.info
    }

    /// Convert into the entry's metadata.
    #[must_use]
    pub fn into_info(self) -> FileInfo {
        self.info
    }
}

/// One batch of entries from [`ReadDirFile::read_dir`](super::ReadDirFile::read_dir).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirBatch {
    /// Entries in this batch; may be empty.
    pub entries: Vec<DirEntry>,
    /// Set once the directory has no more entries to return.
    pub exhausted: bool,
}

impl DirBatch {
    /// A batch that may be followed by more.
    #[must_use]
    pub fn more(entries: Vec<DirEntry>) -> Self {
        Self {
            entries,
            exhausted: false,
        }
    }

    /// The final batch.
    #[must_use]
    pub fn last(entries: Vec<DirEntry>) -> Self {
        Self {
            entries,
            exhausted: true,
        }
    }
}
