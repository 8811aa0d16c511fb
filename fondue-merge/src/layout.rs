//! Resolution of unit names to on-disk source paths.

use std::path::{Path, PathBuf};

use fondue_manifest::Manifest;

use crate::transform::FileKind;

/// Resolve the source file backing one side of a translation unit.
pub fn unit_path(root: &Path, manifest: &Manifest, unit: &str, kind: FileKind) -> PathBuf {
    let layout = &manifest.layout;
    match kind {
        FileKind::Declaration => root
            .join(layout.declarations_dir(&manifest.library.name))
            .join(format!("{unit}.{}", layout.declaration_ext)),
        FileKind::Implementation => root
            .join(&layout.implementations)
            .join(format!("{unit}.{}", layout.implementation_ext)),
    }
}
