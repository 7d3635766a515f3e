//! Reading symbolic links through the optional [`ReadLinkFs`] capability.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::path::{LinkTarget, LinkTargetPolicy};

/// Reads the target of the symbolic link `name` in `fsys`.
///
/// Equivalent to [`read_link_with_policy`] with the default
/// [`LinkTargetPolicy`].
///
/// # Errors
///
/// See [`read_link_with_policy`].
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
///         .with("file", MapFile::new("hello"))
///         .with("link", MapFile::symlink("file")),
/// );
///
/// assert_eq!(fslink::read_link(&fsys, "link").unwrap(), "file");
/// ```
pub fn read_link(fsys: &Arc<dyn FileSystem>, name: &str) -> Result<String> {
    read_link_with_policy(fsys, name, LinkTargetPolicy::default())
}

/// Reads the target of the symbolic link `name`, validating it under `policy`.
///
/// # Errors
///
/// - [`Error::Unsupported`] if `fsys` does not implement
///   [`ReadLinkFs`](crate::fs::ReadLinkFs); the message names the concrete
///   filesystem type.
/// - Any error returned by the capability itself, unchanged.
/// - [`Error::MalformedLink`] if the stored text is rejected by `policy`.
pub fn read_link_with_policy(
    fsys: &Arc<dyn FileSystem>,
    name: &str,
    policy: LinkTargetPolicy,
) -> Result<String> {
    let Some(links) = fsys.as_read_link() else {
        log::debug!("readlink {name}: {} has no link support", fsys.kind());
        return Err(Error::unsupported(
            "readlink",
            name,
            format!(
                "symlink found in file system which does not support reading links: {}",
                fsys.kind()
            ),
        ));
    };
    let raw = links.read_link(name)?;
    let target = LinkTarget::parse(policy, name, raw)?;
    if target.climbs() {
        log::debug!("readlink {name}: target {target} leaves the link's directory");
    }
    Ok(target.into_string())
}
