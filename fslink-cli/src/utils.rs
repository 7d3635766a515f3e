//! Utility functions for CLI operations.
//!
//! Builds the filesystem handle and configuration every command works
//! against.

use crate::error::CliError;
use fslink::dirfs::DirFs;
use fslink::fs::FileSystem;
use fslink::output::{OutputFormat, OutputFormatter};
use fslink::path::LinkTargetPolicy;
use fslink::{Config, ConfigBuilder};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose is only read when the logger is built
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Host directory exposed as the filesystem root.
    pub root: PathBuf,

    /// Subdirectory of the root to restrict operations to.
    pub sub: Option<String>,

    /// Output format override.
    pub format: Option<OutputFormat>,

    /// Link policy override.
    pub link_policy: Option<LinkTargetPolicy>,
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match home::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Load hierarchical configuration.
///
/// Precedence, highest first:
/// 1. Global options
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let overrides = Config {
        link_policy: global.link_policy,
        output_format: global.format,
    };
    ConfigBuilder::new()
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the host directory named by `--root`, narrowed by `--sub`.
pub fn open_filesystem(global: &GlobalOptions) -> Result<Arc<dyn FileSystem>, CliError> {
    let root = expand_tilde(&global.root);
    if !root.is_dir() {
        return Err(CliError::InvalidArguments(format!(
            "root {} is not a directory",
            root.display()
        )));
    }
    log::debug!("serving {}", root.display());
    let fsys: Arc<dyn FileSystem> = Arc::new(DirFs::new(root));
    match &global.sub {
        Some(dir) => Ok(fslink::sub(&fsys, dir)?),
        None => Ok(fsys),
    }
}

/// Everything a command needs: the filesystem, the effective
/// configuration, and a formatter for it.
pub struct Session {
    /// The filesystem commands operate on.
    pub fsys: Arc<dyn FileSystem>,
    /// The effective configuration.
    pub config: Config,
}

impl Session {
    /// Load configuration and open the filesystem.
    pub fn open(global: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_configuration(global)?;
        let fsys = open_filesystem(global)?;
        Ok(Self { fsys, config })
    }

    /// Formatter for the configured output format.
    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        self.config.output_format().create_formatter()
    }
}
