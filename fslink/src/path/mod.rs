//! Path grammar for rooted relative paths and link targets.
//!
//! Every name handed to a [`FileSystem`](crate::fs::FileSystem) is a
//! slash-separated path relative to the filesystem root. This module
//! provides the validators and the small set of path helpers the rest of the
//! crate is built on.
//!
//! # Rooted Relative Paths
//!
//! A valid path:
//! - does not start or end with a slash
//! - has no empty segments (`a//b`)
//! - has no `.` or `..` segments
//!
//! The single exception is `.` on its own, which names the root.
//!
//! ```
//! use fslink::path::valid_path;
//!
//! assert!(valid_path("."));
//! assert!(valid_path("a/b/c"));
//! assert!(!valid_path("/a"));
//! assert!(!valid_path("a/../b"));
//! assert!(!valid_path(""));
//! ```
//!
//! # Link Targets
//!
//! Link targets are relative to the directory holding the link, so they may
//! legitimately climb out of it. The default [`LinkTargetPolicy`] accepts
//! `..`, anything starting with `../`, or a valid path; absolute targets are
//! always rejected.
//!
//! ```
//! use fslink::path::LinkTargetPolicy;
//!
//! let policy = LinkTargetPolicy::default();
//! assert!(policy.accepts(".."));
//! assert!(policy.accepts("../sibling"));
//! assert!(policy.accepts("a/b"));
//! assert!(!policy.accepts("/abs"));
//! assert!(!policy.accepts("./a"));
//! ```

mod grammar;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use grammar::{base, join, parent, strip_base, valid_path};
pub use types::{LinkTarget, LinkTargetPolicy, PathName};
