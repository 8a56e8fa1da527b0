//! compile-files - Concatenate the text files of several directories into one report
//!
//! compile-files provides:
//! - Recursive collection of file contents with path headers and separators
//! - Inline placeholders for binary or unreadable files
//! - An indented directory tree appended to the same report

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
