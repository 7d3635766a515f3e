//! Environment variable overrides.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::path::LinkTargetPolicy;

/// Overrides the link target policy.
pub const LINK_POLICY_ENV: &str = "FSLINK_LINK_POLICY";

/// Overrides the output format.
pub const OUTPUT_FORMAT_ENV: &str = "FSLINK_OUTPUT_FORMAT";

/// Handles `FSLINK_*` environment variable overrides.
///
/// # Examples
///
/// ```no_run
/// use fslink::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if a value is not
    /// recognized.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(LINK_POLICY_ENV) {
            config.link_policy = Some(LinkTargetPolicy::parse(&val).map_err(|message| {
                Error::Validation {
                    field: LINK_POLICY_ENV.into(),
                    message,
                }
            })?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(OutputFormat::parse(&val).map_err(|message| {
                Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message,
                }
            })?);
        }

        Ok(())
    }
}
