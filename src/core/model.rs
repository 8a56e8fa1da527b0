//! Compile model - configuration, statistics and the completion summary

use serde::Serialize;
use std::path::PathBuf;

/// Base directory used when `--base` is not given
pub const DEFAULT_BASE: &str = "~/Desktop/RocketLaunchTracker";

/// Report path used when `--output` is not given
pub const DEFAULT_OUTPUT: &str = "~/Desktop/compiled_files.txt";

/// Directories collected (relative to the base) when none are given
pub const DEFAULT_DIRECTORIES: &[&str] = &[
    "App",
    "Services",
    "Models",
    "Utilities",
    "ShareExtension",
    "ViewModels",
    "Views",
];

/// Fully resolved settings for one compile run
#[derive(Debug, Clone)]
pub struct CompileConfig {
    /// Base directory, printed as the tree section
    pub base: PathBuf,

    /// Directories to collect, in report order
    pub directories: Vec<PathBuf>,

    /// Report file (truncated at the start of a run)
    pub output: PathBuf,

    /// Whether to append the directory tree
    pub tree: bool,

    /// Per-file diagnostics on stderr
    pub verbose: bool,
}

impl CompileConfig {
    pub fn new(base: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            directories: Vec::new(),
            output: output.into(),
            tree: true,
            verbose: false,
        }
    }

    pub fn with_directories<I, P>(mut self, directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.directories = directories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tree(mut self, tree: bool) -> Self {
        self.tree = tree;
        self
    }
}

/// Counters accumulated while writing the report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompileStats {
    /// Directories that existed and were collected
    pub directories: usize,
    pub missing_directories: usize,
    /// File blocks written (text + non-text + read errors)
    pub files: usize,
    pub text_files: usize,
    pub non_text_files: usize,
    pub read_errors: usize,
    pub walk_errors: usize,
    /// Lines written to the tree section (directories and files)
    pub tree_entries: usize,
}

/// Completion summary printed on stdout
#[derive(Debug, Clone, Serialize)]
pub struct CompileSummary {
    pub output: String,
    pub stats: CompileStats,
}
