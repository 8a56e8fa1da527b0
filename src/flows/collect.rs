//! Collector flow - Concatenate directory contents into the report
//!
//! Every file under each directory becomes one block: a `File:` header, the
//! text (or a placeholder), and separators. Missing directories and
//! unreadable files are reported inline and never stop the run.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::file_reader::{read_text_file, ReadError};
use crate::core::model::CompileStats;
use crate::core::paths::normalize_path;
use crate::core::render::ReportWriter;
use crate::core::walk::{is_directory_like, ordered_walk};

/// Options for the collector
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    /// A file never read into the report (the report itself)
    pub exclude: Option<PathBuf>,
    /// Per-file diagnostics on stderr
    pub verbose: bool,
}

/// Write one block per file under each of `directories`
pub fn collect_directories<W: Write>(
    report: &mut ReportWriter<W>,
    directories: &[PathBuf],
    options: &CollectOptions,
    stats: &mut CompileStats,
) -> Result<()> {
    for directory in directories {
        collect_directory(report, directory, options, stats)?;
    }
    Ok(())
}

fn collect_directory<W: Write>(
    report: &mut ReportWriter<W>,
    directory: &Path,
    options: &CollectOptions,
    stats: &mut CompileStats,
) -> Result<()> {
    let shown = normalize_path(directory);

    if !directory.exists() {
        if options.verbose {
            eprintln!("{} directory not found: {}", "warning:".yellow().bold(), shown);
        }
        report.directory_not_found(&shown)?;
        stats.missing_directories += 1;
        return Ok(());
    }

    report.directory_header(&shown)?;
    stats.directories += 1;

    // a path that exists but is not a directory has nothing to walk
    if !directory.is_dir() {
        return Ok(());
    }

    for entry in ordered_walk(directory) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if options.verbose {
                    eprintln!("{} {}", "warning:".yellow().bold(), e);
                }
                report.walk_error(&e)?;
                stats.walk_errors += 1;
                continue;
            }
        };

        if is_directory_like(&entry) || is_excluded(entry.path(), options.exclude.as_deref()) {
            continue;
        }

        let path = normalize_path(entry.path());
        match read_text_file(entry.path()) {
            Ok(content) => {
                report.file_block(&path, &content)?;
                stats.text_files += 1;
                if options.verbose {
                    eprintln!("{} {}", "added".green(), path);
                }
            }
            Err(err) => {
                report.file_block(&path, &err.placeholder())?;
                match err {
                    ReadError::NotText => stats.non_text_files += 1,
                    ReadError::Io(_) => stats.read_errors += 1,
                }
                if options.verbose {
                    eprintln!("{} {} ({})", "skipped".yellow(), path, err);
                }
            }
        }
        stats.files += 1;
    }

    Ok(())
}

fn is_excluded(path: &Path, exclude: Option<&Path>) -> bool {
    let Some(exclude) = exclude else {
        return false;
    };
    path.canonicalize()
        .map(|p| p == exclude)
        .unwrap_or(false)
}
