//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Run key extraction over the project and emit the inventory
//! - `init`: Create a default `.ngkeysrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translation keys from templates and sources
    Extract(ExtractCommand),
    /// Initialize ngkeys configuration file
    Init,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Project root directory (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Source directory under the project root (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Write the key inventory to FILE instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output (lists every extracted key)
    #[arg(short, long)]
    pub verbose: bool,
}
