//! Cat command implementation.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use std::io::Write;

/// Write a file's contents to stdout.
#[derive(Args)]
pub struct CatCommand {
    /// Path relative to the root
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl CatCommand {
    /// Execute the cat command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let data = session.fsys.read_file(&self.path)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&data)?;
        stdout.flush()?;
        Ok(())
    }
}
