//! Core operations.
//!
//! Business logic for fondue commands, separated from CLI argument
//! parsing and output rendering.

pub mod check;
pub mod melt;

pub use check::check;
pub use melt::melt;
