//! CLI structure and command definitions.

use crate::commands::{CatCommand, LsCommand, LstatCommand, ReadlinkCommand, StatCommand};
use clap::{Parser, Subcommand};
use fslink::output::OutputFormat;
use fslink::path::LinkTargetPolicy;
use std::path::PathBuf;

/// Command-line tool for inspecting symbolic links in a directory tree.
#[derive(Parser)]
#[command(name = "fslink")]
#[command(
    version,
    about = "Inspect symbolic links through read-only filesystem views",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Host directory to expose as the filesystem root
    #[arg(
        long,
        value_name = "DIR",
        global = true,
        default_value = ".",
        env = "FSLINK_ROOT"
    )]
    pub root: PathBuf,

    /// Restrict all operations to this subdirectory of the root
    #[arg(long, value_name = "DIR", global = true)]
    pub sub: Option<String>,

    /// Output format (text or json)
    #[arg(long, value_name = "FORMAT", global = true, value_parser = OutputFormat::parse)]
    pub format: Option<OutputFormat>,

    /// Which link targets readlink accepts (relative or contained)
    #[arg(long, value_name = "POLICY", global = true, value_parser = LinkTargetPolicy::parse)]
    pub link_policy: Option<LinkTargetPolicy>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the target of a symbolic link
    Readlink(ReadlinkCommand),

    /// Print metadata without following a final symbolic link
    Lstat(LstatCommand),

    /// Print metadata of the file a path resolves to
    Stat(StatCommand),

    /// List a directory
    Ls(LsCommand),

    /// Write a file's contents to stdout
    Cat(CatCommand),
}
