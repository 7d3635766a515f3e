//! Stat command implementation.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;

/// Print metadata of the file a path resolves to.
#[derive(Args)]
pub struct StatCommand {
    /// Path relative to the root
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl StatCommand {
    /// Execute the stat command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let info = session.fsys.stat(&self.path)?;
        println!("{}", session.formatter().info(&self.path, &info));
        Ok(())
    }
}
