//! Lstat command implementation.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;

/// Print metadata without following a final symbolic link.
#[derive(Args)]
pub struct LstatCommand {
    /// Paths relative to the root
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl LstatCommand {
    /// Execute the lstat command.
    ///
    /// Paths are reported in order; the first failure stops the command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let formatter = session.formatter();
        for path in &self.paths {
            let info = fslink::lstat(&session.fsys, path)?;
            println!("{}", formatter.info(path, &info));
        }
        Ok(())
    }
}
