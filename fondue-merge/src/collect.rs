//! Collection of transformed units in manifest order.

use std::path::Path;

use eyre::Result;
use fondue_manifest::Manifest;
use indexmap::IndexMap;

use crate::layout::unit_path;
use crate::transform::{FileKind, MergeRules, transform_file};

/// Everything gathered from one side of the merge, declaration or
/// implementation, across all units.
#[derive(Debug, Default)]
pub(crate) struct Batch {
    /// Concatenated include lines from every unit, with a separator
    /// line after each unit's block.
    pub includes_pool: String,
    /// Concatenated content, one blank line between units.
    pub content: String,
    /// Content line count per unit, in merge order.
    pub line_counts: IndexMap<String, usize>,
}

pub(crate) fn collect_units(
    root: &Path,
    manifest: &Manifest,
    kind: FileKind,
    rules: &MergeRules,
) -> Result<Batch> {
    let mut batch = Batch::default();
    for unit in &manifest.units {
        let path = unit_path(root, manifest, unit, kind);
        let text = transform_file(&path, kind, rules)?;
        batch.includes_pool.push_str(&text.includes);
        batch.includes_pool.push('\n');
        batch.content.push_str(&text.content);
        batch.content.push('\n');
        batch
            .line_counts
            .insert(unit.clone(), text.content.lines().count());
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(units: &[&str]) -> Manifest {
        let toml = format!(
            "units = [{}]\n\n[library]\nname = \"mylib\"\n",
            units
                .iter()
                .map(|u| format!("\"{u}\""))
                .collect::<Vec<_>>()
                .join(", ")
        );
        toml.parse().unwrap()
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_units_merge_in_manifest_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "include/mylib/a.hpp", "#ifndef A\nint a();\n#endif\n");
        write(
            root,
            "include/mylib/b.hpp",
            "#ifndef B\n#include <string>\nint b();\n#endif\n",
        );

        let manifest = manifest(&["a", "b"]);
        let rules = MergeRules::new(&manifest.library);
        let batch = collect_units(root, &manifest, FileKind::Declaration, &rules).unwrap();

        assert_eq!(batch.includes_pool, "\n#include <string>\n\n");
        assert_eq!(batch.content, "int a();\n\nint b();\n\n");
        assert_eq!(
            batch.line_counts.keys().collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(batch.line_counts["a"], 1);
    }

    #[test]
    fn test_missing_unit_file_aborts_collection() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "src/a.cpp", "namespace mylib {\n}\n");

        let manifest = manifest(&["a", "ghost"]);
        let rules = MergeRules::new(&manifest.library);
        let err = collect_units(root, &manifest, FileKind::Implementation, &rules).unwrap_err();
        assert!(err.to_string().contains("ghost.cpp"));
    }
}
