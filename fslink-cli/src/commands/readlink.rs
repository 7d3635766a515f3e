//! Readlink command implementation.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;

/// Print the target of a symbolic link.
#[derive(Args)]
pub struct ReadlinkCommand {
    /// Path of the link, relative to the root
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ReadlinkCommand {
    /// Execute the readlink command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let policy = session.config.link_policy();
        let target = fslink::read_link_with_policy(&session.fsys, &self.path, policy)?;
        println!("{}", session.formatter().link(&self.path, &target));
        Ok(())
    }
}
