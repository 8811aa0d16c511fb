//! Core utilities for the fondue single-header generator.
//!
//! This crate provides the file-writing primitives and small shared
//! helpers used across the fondue workspace.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::to_macro_case;
