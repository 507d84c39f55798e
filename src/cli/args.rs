//! CLI argument definitions using clap.
//!
//! bundlelint is a single-purpose pipeline step, so there are no subcommands:
//! running the binary runs the check. Bundle paths come from the config file
//! (or its defaults) and can be overridden on the command line.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Driving bundle path (overrides config file)
    #[arg(long)]
    pub driving: Option<PathBuf>,

    /// Reference bundle path, repeatable (overrides config file)
    #[arg(long = "reference")]
    pub references: Vec<PathBuf>,

    /// Write a default .bundlelintrc.json to the current directory and exit
    #[arg(long)]
    pub init: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
