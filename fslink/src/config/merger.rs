//! Configuration merging.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use fslink::config::{Config, ConfigMerger};
/// use fslink::output::OutputFormat;
///
/// let mut result = Config { output_format: Some(OutputFormat::Text), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
///
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Json));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; fields set in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.link_policy.is_some() {
            target.link_policy = source.link_policy;
        }
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
