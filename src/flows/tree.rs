//! Tree flow - Append an indented directory listing to the report

use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

use crate::core::model::CompileStats;
use crate::core::paths::{display_name, normalize_path};
use crate::core::render::ReportWriter;
use crate::core::walk::{is_directory_like, ordered_walk};

/// Write the `Project Directory Tree` section for `base`
///
/// Each directory is one line (`name/`) indented by its depth; its files
/// follow, one level deeper, before any of its subdirectories.
pub fn append_tree<W: Write>(
    report: &mut ReportWriter<W>,
    base: &Path,
    verbose: bool,
    stats: &mut CompileStats,
) -> Result<()> {
    report.tree_header()?;

    if !base.exists() {
        if verbose {
            eprintln!(
                "{} tree base not found: {}",
                "warning:".yellow().bold(),
                normalize_path(base)
            );
        }
        report.tree_missing(&normalize_path(base))?;
        report.tree_footer()?;
        return Ok(());
    }

    if !base.is_dir() {
        report.tree_footer()?;
        return Ok(());
    }

    for entry in ordered_walk(base) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if verbose {
                    eprintln!("{} {}", "warning:".yellow().bold(), e);
                }
                report.walk_error(&e)?;
                stats.walk_errors += 1;
                continue;
            }
        };

        let depth = entry.depth();
        if depth == 0 {
            report.tree_line(0, &display_name(entry.path()), true)?;
        } else if entry.file_type().is_dir() {
            report.tree_line(depth, &entry.file_name().to_string_lossy(), true)?;
        } else if is_directory_like(&entry) {
            // symlinked directories are neither listed nor descended into
            continue;
        } else {
            report.tree_line(depth, &entry.file_name().to_string_lossy(), false)?;
        }
        stats.tree_entries += 1;
    }

    report.tree_footer()?;
    Ok(())
}
