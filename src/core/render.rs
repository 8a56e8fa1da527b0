//! Renderer module
//!
//! Lays out the plain-text report (headers, separators, file blocks, tree
//! lines) and renders the completion summary in text or json.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

use crate::core::model::{CompileStats, CompileSummary};

/// Width of every separator line
pub const SEPARATOR_WIDTH: usize = 80;

/// Heading of the tree section
pub const TREE_HEADING: &str = "Project Directory Tree";

/// Spaces per tree level
pub const TREE_INDENT: usize = 4;

/// A separator line made of `ch`
pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(SEPARATOR_WIDTH).collect()
}

/// Writes report sections to any sink
pub struct ReportWriter<W: Write> {
    out: W,
    heavy: String,
    light: String,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            heavy: rule('='),
            light: rule('-'),
        }
    }

    pub fn directory_not_found(&mut self, path: &str) -> io::Result<()> {
        writeln!(self.out, "Directory not found: {}", path)?;
        writeln!(self.out, "{}", self.heavy)?;
        writeln!(self.out)
    }

    pub fn directory_header(&mut self, path: &str) -> io::Result<()> {
        writeln!(self.out, "Directory: {}", path)?;
        writeln!(self.out, "{}", self.heavy)?;
        writeln!(self.out)
    }

    /// One file block; `body` is the content or a placeholder line
    pub fn file_block(&mut self, path: &str, body: &str) -> io::Result<()> {
        writeln!(self.out, "File: {}", path)?;
        writeln!(self.out, "{}", self.light)?;
        writeln!(self.out, "{}", body)?;
        writeln!(self.out, "{}", self.light)?;
        writeln!(self.out)
    }

    pub fn walk_error(&mut self, error: impl Display) -> io::Result<()> {
        writeln!(self.out, "[Error reading directory: {}]", error)
    }

    pub fn tree_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", TREE_HEADING)?;
        writeln!(self.out, "{}", self.heavy)
    }

    /// A tree line at `depth`; directories get a trailing '/'
    pub fn tree_line(&mut self, depth: usize, name: &str, is_dir: bool) -> io::Result<()> {
        let indent = " ".repeat(TREE_INDENT * depth);
        if is_dir {
            writeln!(self.out, "{}{}/", indent, name)
        } else {
            writeln!(self.out, "{}{}", indent, name)
        }
    }

    pub fn tree_missing(&mut self, path: &str) -> io::Result<()> {
        writeln!(self.out, "Directory not found: {}", path)
    }

    pub fn tree_footer(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.heavy)?;
        writeln!(self.out)
    }

    /// Flush and hand back the sink
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Completion summary format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for SummaryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(SummaryFormat::Text),
            "json" => Ok(SummaryFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render the completion summary for stdout
pub fn render_summary(summary: &CompileSummary, format: SummaryFormat) -> String {
    match format {
        SummaryFormat::Text => format!(
            "✅ {} Output written to {}",
            "Compilation complete.".green().bold(),
            summary.output
        ),
        SummaryFormat::Json => serde_json::to_string(summary).unwrap_or_else(|e| {
            format!(r#"{{"error":"serialization failed: {}"}}"#, e)
        }),
    }
}

/// Print statistics to stderr
pub fn print_stats(stats: &CompileStats) {
    eprintln!("📊 Compile Statistics:");
    eprintln!(
        "   Directories: {} ({} missing)",
        stats.directories, stats.missing_directories
    );
    eprintln!(
        "   Files: {} ({} text, {} non-text, {} unreadable)",
        stats.files, stats.text_files, stats.non_text_files, stats.read_errors
    );
    if stats.walk_errors > 0 {
        eprintln!(
            "   {} {} directory entries could not be read",
            "⚠️".yellow(),
            stats.walk_errors
        );
    }
    eprintln!("   Tree entries: {}", stats.tree_entries);
    eprintln!();
}
