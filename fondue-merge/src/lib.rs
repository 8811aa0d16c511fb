//! The merge pipeline behind `fondue melt`.
//!
//! A [`Melter`] reads every translation unit named by the manifest,
//! strips per-file boilerplate, pools and deduplicates their includes,
//! and assembles one single-header artifact with declarations up front
//! and implementations behind the library's guard macro.

mod assemble;
mod collect;
mod includes;
mod layout;
mod report;
mod transform;

use std::path::Path;

use chrono::{DateTime, Utc};
use eyre::Result;
use fondue_core::GeneratedFile;
use fondue_manifest::Manifest;
use indexmap::IndexMap;

pub use assemble::SingleHeader;
pub use layout::unit_path;
pub use report::{IncludeCounts, MeltReport, UnitLines};
pub use transform::{FileKind, MergeRules, UnitText, transform_file, transform_source};

use assemble::Section;
use collect::collect_units;
use includes::dedup_includes;

/// Drives a full merge for one manifest.
pub struct Melter<'a> {
    manifest: &'a Manifest,
}

impl<'a> Melter<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self { manifest }
    }

    /// Run the pipeline in memory, without touching the output file.
    ///
    /// The timestamp is caller-supplied so renders can be reproduced.
    pub fn assemble(
        &self,
        root: &Path,
        timestamp: DateTime<Utc>,
    ) -> Result<(SingleHeader, MeltReport)> {
        let rules = MergeRules::new(&self.manifest.library);
        let declarations = collect_units(root, self.manifest, FileKind::Declaration, &rules)?;
        let implementations =
            collect_units(root, self.manifest, FileKind::Implementation, &rules)?;

        let declaration_includes = dedup_includes(&declarations.includes_pool);
        let implementation_includes = dedup_includes(&implementations.includes_pool);

        let mut units = IndexMap::new();
        for unit in &self.manifest.units {
            units.insert(
                unit.clone(),
                UnitLines {
                    declarations: declarations.line_counts.get(unit).copied().unwrap_or(0),
                    implementations: implementations.line_counts.get(unit).copied().unwrap_or(0),
                },
            );
        }

        let report = MeltReport {
            library: self.manifest.library.name.clone(),
            guard: self.manifest.library.guard_macro(),
            units,
            declaration_includes: IncludeCounts::new(
                &declarations.includes_pool,
                &declaration_includes,
            ),
            implementation_includes: IncludeCounts::new(
                &implementations.includes_pool,
                &implementation_includes,
            ),
            output: root.join(
                self.manifest
                    .layout
                    .output_path(&self.manifest.library.name),
            ),
        };

        let header = SingleHeader::new(
            self.manifest,
            timestamp,
            Section {
                includes: declaration_includes,
                content: declarations.content,
            },
            Section {
                includes: implementation_includes,
                content: implementations.content,
            },
        );

        Ok((header, report))
    }

    /// Assemble and write the artifact under `root`.
    pub fn melt(&self, root: &Path) -> Result<MeltReport> {
        let (header, report) = self.assemble(root, Utc::now())?;
        header.write(root)?;
        Ok(report)
    }

    /// Assemble and return the artifact text without writing it.
    pub fn preview(&self, root: &Path) -> Result<(String, MeltReport)> {
        let (header, report) = self.assemble(root, Utc::now())?;
        Ok((header.render(), report))
    }
}
