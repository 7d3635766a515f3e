//! Main entry point for the fslink CLI.
//!
//! Exposes a host directory (optionally narrowed to a subdirectory) and
//! runs one link-aware operation against it:
//! - `readlink`: print a link's target
//! - `lstat` / `stat`: unfollowed and followed metadata
//! - `ls`: list a directory
//! - `cat`: print a file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments; usage errors share the invalid-arguments code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(8);
        }
    };

    // Route the library's `log` output through the CLI logger
    let logger = fslink::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        logger.warn(&format!("could not install logger: {e}"));
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        root: cli.root,
        sub: cli.sub,
        format: cli.format,
        link_policy: cli.link_policy,
    };

    let result = match cli.command {
        cli::Command::Readlink(cmd) => cmd.execute(&global),
        cli::Command::Lstat(cmd) => cmd.execute(&global),
        cli::Command::Stat(cmd) => cmd.execute(&global),
        cli::Command::Ls(cmd) => cmd.execute(&global),
        cli::Command::Cat(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
