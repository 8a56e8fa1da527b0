//! Flows module - The steps of a compile run
//!
//! Provides:
//! - collect: Concatenate every file under each directory into the report
//! - tree: Append an indented directory tree to the report
//! - compile: Straight-line entry sequence (collect, tree, summary)

pub mod collect;
pub mod compile;
pub mod tree;
