//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::path::LinkTargetPolicy;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered; the
/// accessors fill in defaults.
///
/// # Examples
///
/// ```
/// use fslink::config::Config;
///
/// let config: Config = serde_yaml::from_str("link_policy: contained\n").unwrap();
/// assert!(config.output_format.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Which link targets `readlink` accepts.
    pub link_policy: Option<LinkTargetPolicy>,

    /// Default output format for the CLI.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The configured link policy, or the default.
    #[must_use]
    pub fn link_policy(&self) -> LinkTargetPolicy {
        self.link_policy.unwrap_or_default()
    }

    /// The configured output format, or the default.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}
