//! vidsh binary: wires the shell to stdin/stdout.

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vidsh::catalog;
use vidsh::cli::Cli;
use vidsh::Shell;

/// Initializes tracing to stderr so log lines never interleave with
/// shell output. RUST_LOG overrides the verbosity flags.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let videos = match &cli.catalog {
        Some(path) => catalog::load_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => catalog::default_catalog(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(videos, stdin.lock(), stdout.lock());
    shell.run().context("shell I/O failure")?;
    Ok(())
}
