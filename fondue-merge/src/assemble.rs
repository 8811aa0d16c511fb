//! Assembly of the final single-header artifact.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fondue_core::{FileRules, GeneratedFile};
use fondue_manifest::Manifest;

/// One side of the artifact: a deduplicated include block followed by
/// the merged content of every unit.
#[derive(Debug)]
pub(crate) struct Section {
    pub includes: String,
    pub content: String,
}

/// The assembled single-header artifact.
///
/// Declarations come first so the header can be included anywhere;
/// implementations follow inside an `#ifdef` block that exactly one
/// translation unit is expected to enable.
#[derive(Debug)]
pub struct SingleHeader {
    path: PathBuf,
    banner: Option<String>,
    guard: String,
    timestamp: DateTime<Utc>,
    declarations: Section,
    implementations: Section,
}

impl SingleHeader {
    pub(crate) fn new(
        manifest: &Manifest,
        timestamp: DateTime<Utc>,
        declarations: Section,
        implementations: Section,
    ) -> Self {
        Self {
            path: manifest.layout.output_path(&manifest.library.name),
            banner: manifest.library.banner.clone(),
            guard: manifest.library.guard_macro(),
            timestamp,
            declarations,
            implementations,
        }
    }
}

impl GeneratedFile for SingleHeader {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let mut out = String::new();
        if let Some(banner) = &self.banner {
            out.push_str(banner.trim_end_matches('\n'));
            out.push_str("\n\n");
        }
        out.push_str(&format!(
            "// Single-header generated {}Z\n\n",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S")
        ));
        out.push_str(&self.declarations.includes);
        out.push('\n');
        out.push_str(&self.declarations.content);
        out.push_str(&format!("\n\n#ifdef {}\n\n", self.guard));
        out.push_str(&self.implementations.includes);
        out.push('\n');
        out.push_str(&self.implementations.content);
        out.push_str(&format!("\n#endif\n#undef {}\n", self.guard));
        out
    }
}
