//! Error types for the fslink library.
//!
//! Every filesystem-facing variant is path-scoped: it records the operation
//! that failed and the path it was applied to, so wrappers such as
//! [`SubView`](crate::sub::SubView) can rewrite the reported path without
//! touching the underlying cause.

use std::io;

use thiserror::Error;

/// Result type alias for operations that may fail with an fslink error.
///
/// # Examples
///
/// ```
/// use fslink::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("target".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fslink library.
#[derive(Debug, Error)]
pub enum Error {
    /// The path does not satisfy the rooted relative path grammar.
    #[error("{op} {path}: invalid path")]
    InvalidPath {
        /// The operation that rejected the path.
        op: &'static str,
        /// The offending path.
        path: String,
    },

    /// A required optional capability is missing on the handle involved.
    #[error("{op} {path}: operation not supported: {reason}")]
    Unsupported {
        /// The operation that required the capability.
        op: &'static str,
        /// The path the operation was applied to.
        path: String,
        /// Which capability is missing, and on what.
        reason: String,
    },

    /// The entry does not exist.
    #[error("{op} {path}: file does not exist")]
    NotFound {
        /// The operation that failed.
        op: &'static str,
        /// The path that was not found.
        path: String,
    },

    /// A symbolic link holds a target that violates the link target grammar.
    #[error("{op} {path}: malformed link target: {target:?}")]
    MalformedLink {
        /// The operation that read the link.
        op: &'static str,
        /// The path of the link.
        path: String,
        /// The raw text stored in the link.
        target: String,
    },

    /// An error reported by the host filesystem.
    #[error("{op} {path}: {source}")]
    Io {
        /// The operation that failed.
        op: &'static str,
        /// The path the operation was applied to.
        path: String,
        /// The underlying cause.
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

/// Coarse classification of an error's cause.
///
/// This mirrors the small set of causes hosts are expected to report, and is
/// what callers should match on when the precise variant does not matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was rejected before any I/O took place.
    InvalidArgument,
    /// The entry does not exist.
    NotFound,
    /// The handle lacks a required capability.
    Unsupported,
    /// Anything else.
    Other,
}

impl Error {
    /// Builds an [`Error::Io`] from a host I/O error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fslink::{Error, ErrorKind};
    /// use std::io;
    ///
    /// let err = Error::io("open", "a/b", io::Error::from(io::ErrorKind::NotFound));
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// assert_eq!(err.path(), Some("a/b"));
    /// ```
    pub fn io(op: &'static str, path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Builds an [`Error::InvalidPath`].
    pub fn invalid_path(op: &'static str, path: impl Into<String>) -> Self {
        Self::InvalidPath {
            op,
            path: path.into(),
        }
    }

    /// Builds an [`Error::NotFound`].
    pub fn not_found(op: &'static str, path: impl Into<String>) -> Self {
        Self::NotFound {
            op,
            path: path.into(),
        }
    }

    /// Builds an [`Error::Unsupported`].
    pub fn unsupported(
        op: &'static str,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Unsupported {
            op,
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns the operation recorded on a path-scoped error.
    #[must_use]
    pub fn op(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPath { op, .. }
            | Self::Unsupported { op, .. }
            | Self::NotFound { op, .. }
            | Self::MalformedLink { op, .. }
            | Self::Io { op, .. } => Some(*op),
            Self::Configuration(_) | Self::Validation { .. } => None,
        }
    }

    /// Returns the path recorded on a path-scoped error.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::InvalidPath { path, .. }
            | Self::Unsupported { path, .. }
            | Self::NotFound { path, .. }
            | Self::MalformedLink { path, .. }
            | Self::Io { path, .. } => Some(path.as_str()),
            Self::Configuration(_) | Self::Validation { .. } => None,
        }
    }

    /// Replaces the path recorded on a path-scoped error.
    ///
    /// Errors that carry no path are left untouched.
    pub fn set_path(&mut self, new_path: impl Into<String>) {
        match self {
            Self::InvalidPath { path, .. }
            | Self::Unsupported { path, .. }
            | Self::NotFound { path, .. }
            | Self::MalformedLink { path, .. }
            | Self::Io { path, .. } => *path = new_path.into(),
            Self::Configuration(_) | Self::Validation { .. } => {}
        }
    }

    /// Re-tags the underlying cause with a new operation and path.
    ///
    /// The cause itself (the `source` of an I/O error, the target of a
    /// malformed link) is kept as is; only the outer `op`/`path` pair is
    /// replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use fslink::Error;
    /// use std::io;
    ///
    /// let err = Error::io("readdir", "dir", io::Error::from(io::ErrorKind::PermissionDenied))
    ///     .with_context("lstat", "dir/link");
    /// assert_eq!(err.op(), Some("lstat"));
    /// assert_eq!(err.path(), Some("dir/link"));
    /// ```
    #[must_use]
    pub fn with_context(mut self, new_op: &'static str, new_path: impl Into<String>) -> Self {
        if let Self::InvalidPath { op, .. }
        | Self::Unsupported { op, .. }
        | Self::NotFound { op, .. }
        | Self::MalformedLink { op, .. }
        | Self::Io { op, .. } = &mut self
        {
            *op = new_op;
        }
        self.set_path(new_path);
        self
    }

    /// Classifies the cause of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPath { .. } | Self::MalformedLink { .. } => ErrorKind::InvalidArgument,
            Self::Unsupported { .. } => ErrorKind::Unsupported,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Io { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => ErrorKind::NotFound,
                io::ErrorKind::InvalidInput => ErrorKind::InvalidArgument,
                io::ErrorKind::Unsupported => ErrorKind::Unsupported,
                _ => ErrorKind::Other,
            },
            Self::Configuration(_) | Self::Validation { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Check if error indicates the entry does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fslink::Error;
    ///
    /// let err = Error::not_found("lstat", "missing");
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if error is a rejected path.
    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// Check if error reports a missing capability.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        self.kind() == ErrorKind::Unsupported
    }
}
