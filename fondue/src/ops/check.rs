//! Check operation - manifest and source tree validation.

use std::path::Path;

use fondue_manifest::Manifest;
use fondue_merge::{FileKind, unit_path};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The manifest itself is already validated at parse time; this
/// verifies that every unit's declaration and implementation file
/// exists under `root`.
pub fn check(manifest: &Manifest, root: &Path, config_path: &Path) -> CheckReport {
    let mut missing = Vec::new();
    for unit in &manifest.units {
        for kind in [FileKind::Declaration, FileKind::Implementation] {
            let path = unit_path(root, manifest, unit, kind);
            if !path.is_file() {
                missing.push(path);
            }
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        library: manifest.library.name.clone(),
        unit_count: manifest.units.len(),
        missing,
    }
}
