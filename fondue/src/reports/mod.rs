//! Report data structures for commands.
//!
//! Commands build reports from operation results, then render them to
//! an Output target.

mod check;
mod melt;
mod output;

pub use check::CheckReport;
pub use melt::MeltOutcome;
pub use output::{Report, TerminalOutput};
