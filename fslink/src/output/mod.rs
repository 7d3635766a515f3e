//! Output formatting for file metadata, listings and link targets.
//!
//! Two formats are provided: an `ls -l` style human format and JSON (one
//! object per line for single results, an array for listings).

mod formatters;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fs::{DirEntry, FileInfo};

pub use formatters::{HumanFormatter, JsonFormatter};

/// Trait for rendering filesystem results.
pub trait OutputFormatter {
    /// Renders metadata for `path`.
    fn info(&self, path: &str, info: &FileInfo) -> String;

    /// Renders a directory listing.
    fn entries(&self, entries: &[DirEntry]) -> String;

    /// Renders the target of the link at `path`.
    fn link(&self, path: &str, target: &str) -> String;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use fslink::output::OutputFormat;
///
/// assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
/// assert_eq!(OutputFormat::default(), OutputFormat::Text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, `ls -l` style.
    #[default]
    Text,
    /// JSON.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }

    /// Parses a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not recognized.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
