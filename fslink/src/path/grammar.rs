//! Validation and manipulation of slash-separated relative paths.
//!
//! The helpers in this module assume their inputs already passed
//! [`valid_path`]; they do no cleaning of their own.

/// Reports whether `name` is a valid rooted relative path.
///
/// `.` is valid and names the root. Otherwise every slash-separated segment
/// must be non-empty and must not be `.` or `..`.
///
/// # Examples
///
/// ```
/// use fslink::path::valid_path;
///
/// assert!(valid_path("x"));
/// assert!(valid_path("x/y"));
/// assert!(!valid_path("x/"));
/// assert!(!valid_path("./x"));
/// assert!(!valid_path("x//y"));
/// ```
#[must_use]
pub fn valid_path(name: &str) -> bool {
    if name == "." {
        return true;
    }
    name.split('/')
        .all(|segment| !matches!(segment, "" | "." | ".."))
}

/// Joins two valid paths.
///
/// `.` on either side is the identity.
///
/// # Examples
///
/// ```
/// use fslink::path::join;
///
/// assert_eq!(join("a", "b/c"), "a/b/c");
/// assert_eq!(join(".", "b"), "b");
/// assert_eq!(join("a", "."), "a");
/// ```
#[must_use]
pub fn join(dir: &str, name: &str) -> String {
    match (dir, name) {
        (".", name) => name.to_string(),
        (dir, ".") => dir.to_string(),
        (dir, name) => format!("{dir}/{name}"),
    }
}

/// Returns every segment but the last, or `.` for single-segment paths.
///
/// # Examples
///
/// ```
/// use fslink::path::parent;
///
/// assert_eq!(parent("a/b/c"), "a/b");
/// assert_eq!(parent("a"), ".");
/// assert_eq!(parent("."), ".");
/// ```
#[must_use]
pub fn parent(name: &str) -> &str {
    match name.rfind('/') {
        Some(i) => &name[..i],
        None => ".",
    }
}

/// Returns the last segment of a path.
///
/// # Examples
///
/// ```
/// use fslink::path::base;
///
/// assert_eq!(base("a/b/c"), "c");
/// assert_eq!(base("a"), "a");
/// ```
#[must_use]
pub fn base(name: &str) -> &str {
    match name.rfind('/') {
        Some(i) => &name[i + 1..],
        None => name,
    }
}

/// Maps `name`, which should lie under `dir`, back to the part after `dir`.
///
/// Returns `.` when `name` equals `dir`, and `None` when `name` is not
/// under `dir` at all.
///
/// # Examples
///
/// ```
/// use fslink::path::strip_base;
///
/// assert_eq!(strip_base("a/b", "a/b"), Some("."));
/// assert_eq!(strip_base("a/b", "a/b/c/d"), Some("c/d"));
/// assert_eq!(strip_base("a/b", "a/bc"), None);
/// assert_eq!(strip_base("a/b", "x"), None);
/// ```
#[must_use]
pub fn strip_base<'a>(dir: &str, name: &'a str) -> Option<&'a str> {
    if name == dir {
        return Some(".");
    }
    let rest = name.strip_prefix(dir)?.strip_prefix('/')?;
    if rest.is_empty() {
        return None;
    }
    Some(rest)
}
