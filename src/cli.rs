//! Command line interface definition.
//!
//! Lives in the library so `xtask` can generate man pages from the same
//! clap definitions the binary uses.

use std::path::PathBuf;

use clap::Parser;

/// Interactive video catalog shell.
///
/// Starts a line-oriented command loop over a video catalog. Type HELP
/// inside the shell for the list of available commands.
#[derive(Debug, Parser)]
#[command(name = "vidsh", version, about)]
pub struct Cli {
    /// Path to a JSON catalog file (uses the built-in demo catalog when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
