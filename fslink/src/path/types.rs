//! Validated path and link target types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::grammar;

/// A rooted relative path that passed [`valid_path`](grammar::valid_path).
///
/// # Examples
///
/// ```
/// use fslink::path::PathName;
///
/// let name = PathName::parse("open", "dir/file").unwrap();
/// assert_eq!(name.parent().as_str(), "dir");
/// assert_eq!(name.base(), "file");
///
/// let err = PathName::parse("open", "/etc").unwrap_err();
/// assert!(err.is_invalid_path());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathName(String);

impl PathName {
    /// Validates `name`, failing with an [`Error::InvalidPath`] tagged `op`.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a valid rooted relative path.
    pub fn parse(op: &'static str, name: &str) -> Result<Self> {
        if grammar::valid_path(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(Error::invalid_path(op, name))
        }
    }

    /// Whether this path names the root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "."
    }

    /// The path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The containing directory; the root for single-segment paths.
    #[must_use]
    pub fn parent(&self) -> Self {
        Self(grammar::parent(&self.0).to_string())
    }

    /// The last segment.
    #[must_use]
    pub fn base(&self) -> &str {
        grammar::base(&self.0)
    }

    /// Appends `other` below this path.
    #[must_use]
    pub fn join(&self, other: &Self) -> Self {
        Self(grammar::join(&self.0, &other.0))
    }

    /// Maps a path under this one back to the suffix relative to it.
    #[must_use]
    pub fn strip<'a>(&self, name: &'a str) -> Option<&'a str> {
        grammar::strip_base(&self.0, name)
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PathName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PathName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for PathName {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Self::parse("parse", name)
    }
}

impl FromStr for PathName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::parse("parse", name)
    }
}

/// Rule set deciding which link targets are well formed.
///
/// The rules track an interface proposal that is still moving, so they are
/// versioned here rather than hard-coded. New variants may be added; the
/// default never changes meaning.
///
/// # Examples
///
/// ```
/// use fslink::path::LinkTargetPolicy;
///
/// assert!(LinkTargetPolicy::Relative.accepts("../../x"));
/// assert!(!LinkTargetPolicy::Contained.accepts("../x"));
/// assert_eq!(LinkTargetPolicy::parse("contained").unwrap(), LinkTargetPolicy::Contained);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTargetPolicy {
    /// `..`, any target starting with `../`, or a valid path.
    #[default]
    Relative,

    /// Valid paths only; targets may not climb above the link's directory.
    Contained,
}

impl LinkTargetPolicy {
    /// Reports whether `target` is well formed under this policy.
    #[must_use]
    pub fn accepts(self, target: &str) -> bool {
        match self {
            Self::Relative => {
                target == ".." || target.starts_with("../") || grammar::valid_path(target)
            }
            Self::Contained => grammar::valid_path(target),
        }
    }

    /// Parses a policy name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not recognized.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "relative" => Ok(Self::Relative),
            "contained" => Ok(Self::Contained),
            _ => Err(format!("invalid link policy: {s}")),
        }
    }
}

impl fmt::Display for LinkTargetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relative => write!(f, "relative"),
            Self::Contained => write!(f, "contained"),
        }
    }
}

/// Text of a symbolic link that passed a [`LinkTargetPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkTarget(String);

impl LinkTarget {
    /// Validates `target`, read from the link at `link`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedLink`] citing `target` if the policy
    /// rejects it.
    ///
    /// # Examples
    ///
    /// ```
    /// use fslink::path::{LinkTarget, LinkTargetPolicy};
    ///
    /// let target = LinkTarget::parse(LinkTargetPolicy::default(), "lnk", "../x".into()).unwrap();
    /// assert!(target.climbs());
    ///
    /// assert!(LinkTarget::parse(LinkTargetPolicy::default(), "lnk", "".into()).is_err());
    /// ```
    pub fn parse(policy: LinkTargetPolicy, link: &str, target: String) -> Result<Self> {
        if policy.accepts(&target) {
            Ok(Self(target))
        } else {
            Err(Error::MalformedLink {
                op: "readlink",
                path: link.to_string(),
                target,
            })
        }
    }

    /// Whether the target climbs out of the link's directory.
    #[must_use]
    pub fn climbs(&self) -> bool {
        self.0 == ".." || self.0.starts_with("../")
    }

    /// The target as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
