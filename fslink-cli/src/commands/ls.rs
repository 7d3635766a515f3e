//! Ls command implementation.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;

/// List a directory.
#[derive(Args)]
pub struct LsCommand {
    /// Directory relative to the root
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: String,
}

impl LsCommand {
    /// Execute the ls command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let entries = session.fsys.read_dir(&self.dir)?;
        let output = session.formatter().entries(&entries);
        if !output.is_empty() {
            println!("{output}");
        }
        Ok(())
    }
}
