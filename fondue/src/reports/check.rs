//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from validating the manifest against the source tree.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Library being checked.
    pub library: String,
    /// Number of units in the manifest.
    pub unit_count: usize,
    /// Source files named by the manifest that do not exist.
    pub missing: Vec<PathBuf>,
}

impl CheckReport {
    /// Whether the check passed (no missing files).
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for path in &self.missing {
            out.warning(&format!("missing {}", path.display()));
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            out.key_value_indented("library", &self.library);
            out.key_value_indented("units", &self.unit_count.to_string());
        }
    }
}
