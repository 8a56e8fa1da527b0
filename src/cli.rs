//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::core::model::{CompileConfig, DEFAULT_BASE, DEFAULT_DIRECTORIES, DEFAULT_OUTPUT};
use crate::core::paths::{expand_home, resolve};
use crate::core::render::SummaryFormat;

/// compile-files - concatenate the text files of several directories into one report.
#[derive(Parser, Debug)]
#[command(name = "compile-files")]
#[command(
    author,
    version,
    about,
    long_about = r#"compile-files walks each DIR recursively and writes every file it finds
into a single plain-text report:

    File: <path>
    ----------------------------------------
    <content>
    ----------------------------------------

Files that are not valid UTF-8 are replaced by "[Binary or non-text file]";
unreadable files by "[Error reading file: ...]". Missing directories are
noted inline. A "Project Directory Tree" of BASE is appended at the end.

With no arguments, the App, Services, Models, Utilities, ShareExtension,
ViewModels and Views directories under BASE are collected.

Examples:
    compile-files
    compile-files --base . src tests -o context.txt
    compile-files --base ~/code/app --no-tree --format json
"#
)]
pub struct Cli {
    /// Directories to collect (relative to BASE unless absolute).
    #[arg(value_name = "DIR", num_args = 0..)]
    pub directories: Vec<PathBuf>,

    /// Base directory for relative DIRs and the tree section.
    #[arg(
        long,
        env = "COMPILE_FILES_BASE",
        default_value = DEFAULT_BASE,
        value_name = "BASE",
        long_help = "Base directory. Relative DIR arguments are resolved against it and the\n\
directory tree at the end of the report lists its contents.\n\n\
A leading '~' expands to the home directory."
    )]
    pub base: PathBuf,

    /// Report file to write (overwritten on every run).
    #[arg(
        short,
        long,
        env = "COMPILE_FILES_OUTPUT",
        default_value = DEFAULT_OUTPUT,
        value_name = "FILE",
        long_help = "Path of the report file. It is truncated at the start of every run and\n\
missing parent directories are created. The report itself is never collected,\n\
even when it lives inside one of the DIRs."
    )]
    pub output: PathBuf,

    /// Do not append the directory tree.
    #[arg(long)]
    pub no_tree: bool,

    /// Completion summary format (text/json).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "json"],
        value_name = "FORMAT",
        long_help = "Format of the completion summary printed on stdout.\n\n\
Supported values:\n\
- text (default): a one-line completion message\n\
- json: the output path and statistics as a JSON object"
    )]
    pub format: String,

    /// Print statistics on stderr.
    #[arg(
        long,
        long_help = "Print report statistics (directories, files, placeholders, tree entries)\n\
to stderr after the run."
    )]
    pub stats: bool,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (no completion message).
    #[arg(
        short,
        long,
        long_help = "Suppress the text completion message. A JSON summary requested with\n\
--format json is still printed."
    )]
    pub quiet: bool,

    /// Verbose mode (per-file diagnostics).
    #[arg(
        short,
        long,
        conflicts_with = "quiet",
        long_help = "Report every file added or skipped, and every missing directory, on stderr."
    )]
    pub verbose: bool,
}

impl Cli {
    /// Resolve arguments into a compile configuration
    pub fn to_config(&self) -> CompileConfig {
        let base = expand_home(&self.base);

        let directories: Vec<PathBuf> = if self.directories.is_empty() {
            DEFAULT_DIRECTORIES
                .iter()
                .map(|dir| resolve(&base, Path::new(dir)))
                .collect()
        } else {
            self.directories
                .iter()
                .map(|dir| resolve(&base, dir))
                .collect()
        };

        let mut config = CompileConfig::new(base, expand_home(&self.output))
            .with_directories(directories)
            .with_tree(!self.no_tree);
        config.verbose = self.verbose;
        config
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: SummaryFormat = cli.format.parse().unwrap_or_default();
    let config = cli.to_config();

    crate::flows::compile::run_compile(&config, format, cli.stats, cli.quiet)
}
