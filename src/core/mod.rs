//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Compile configuration and statistics (model)
//! - Report layout helpers (render)
//! - Path normalization and home expansion
//! - File reading with text/non-text classification
//! - Ordered directory walking

pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod walk;
