//! Compile flow - Collect, append the tree, report completion

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufWriter;

use crate::core::model::{CompileConfig, CompileStats, CompileSummary};
use crate::core::paths::normalize_path;
use crate::core::render::{print_stats, render_summary, ReportWriter, SummaryFormat};
use crate::flows::collect::{collect_directories, CollectOptions};
use crate::flows::tree::append_tree;

/// Write the whole report for `config`
///
/// The output file is truncated first; the tree section follows the
/// collected files in the same file. Only output-side failures are errors.
pub fn compile(config: &CompileConfig) -> Result<CompileSummary> {
    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    let file = File::create(&config.output)
        .with_context(|| format!("Failed to create output file: {:?}", config.output))?;
    let mut report = ReportWriter::new(BufWriter::new(file));
    let mut stats = CompileStats::default();

    let options = CollectOptions {
        exclude: config.output.canonicalize().ok(),
        verbose: config.verbose,
    };

    collect_directories(&mut report, &config.directories, &options, &mut stats)
        .with_context(|| format!("Failed to write report: {:?}", config.output))?;

    if config.tree {
        append_tree(&mut report, &config.base, config.verbose, &mut stats)
            .with_context(|| format!("Failed to write report: {:?}", config.output))?;
    }

    report
        .finish()
        .with_context(|| format!("Failed to flush report: {:?}", config.output))?;

    Ok(CompileSummary {
        output: normalize_path(&config.output),
        stats,
    })
}

/// Run the compile command
pub fn run_compile(
    config: &CompileConfig,
    format: SummaryFormat,
    show_stats: bool,
    quiet: bool,
) -> Result<()> {
    let summary = compile(config)?;

    if show_stats {
        print_stats(&summary.stats);
    }

    if !quiet || format == SummaryFormat::Json {
        println!("{}", render_summary(&summary, format));
    }

    Ok(())
}
