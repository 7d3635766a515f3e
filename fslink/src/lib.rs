#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fslink
//!
//! Symbolic link awareness for read-only, hierarchical filesystems.
//!
//! A [`FileSystem`](fs::FileSystem) only knows how to open paths, following
//! links along the way. This crate adds the link-aware operations on top:
//!
//! - [`read_link`]: the validated target of a link, through the optional
//!   [`ReadLinkFs`](fs::ReadLinkFs) capability.
//! - [`lstat()`]: metadata of a path without following a final link, emulated
//!   by scanning the parent directory.
//! - [`sub()`]: a view of a subdirectory that keeps link support, however
//!   deeply views are nested.
//!
//! Two hosts are included: [`memfs::MapFs`] (in memory) and
//! [`dirfs::DirFs`] (a host directory).
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use fslink::fs::FileSystem;
//! use fslink::memfs::{MapFile, MapFs};
//!
//! let fsys: Arc<dyn FileSystem> = Arc::new(
//!     MapFs::new()
//!         .with("releases/v2/app", MapFile::new("binary"))
//!         .with("current", MapFile::symlink("releases/v2")),
//! );
//!
//! assert!(fslink::lstat(&fsys, "current").unwrap().is_symlink());
//! assert!(fsys.stat("current").unwrap().is_dir());
//! assert_eq!(fslink::read_link(&fsys, "current").unwrap(), "releases/v2");
//!
//! let releases = fslink::sub(&fsys, "releases").unwrap();
//! assert_eq!(releases.read_file("v2/app").unwrap(), b"binary");
//! ```

pub mod config;
pub mod dirfs;
pub mod error;
pub mod fs;
pub mod logging;
pub mod lstat;
pub mod memfs;
pub mod output;
pub mod path;
pub mod readlink;
pub mod sub;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use lstat::{lstat, LSTAT_BATCH_SIZE};
pub use readlink::{read_link, read_link_with_policy};
pub use sub::{sub, SubView};
