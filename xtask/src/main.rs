//! Development task runner for vidsh.
//!
//! Currently generates the man page from the clap definitions exposed by
//! the main crate.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Development tasks for vidsh")]
enum Task {
    /// Generate the vidsh man page
    Man {
        /// Output directory for the generated page
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Task::parse() {
        Task::Man { out_dir } => generate_man(&out_dir),
    }
}

fn generate_man(out_dir: &PathBuf) -> Result<()> {
    let command = vidsh::cli::Cli::command();
    let man = clap_mangen::Man::new(command);

    let mut rendered = Vec::new();
    man.render(&mut rendered).context("failed to render man page")?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let path = out_dir.join("vidsh.1");
    fs::write(&path, rendered).with_context(|| format!("failed to write {}", path.display()))?;

    println!("wrote {}", path.display());
    Ok(())
}
