//! Summary data collected during a melt.

use std::path::PathBuf;

use indexmap::IndexMap;

/// Content line counts for one translation unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitLines {
    pub declarations: usize,
    pub implementations: usize,
}

/// Include statistics for one side of the artifact.
#[derive(Debug, Clone, Copy)]
pub struct IncludeCounts {
    /// Include lines gathered across all units, duplicates included.
    pub collected: usize,
    /// Lines left after sorting and deduplication.
    pub unique: usize,
}

impl IncludeCounts {
    pub(crate) fn new(pool: &str, deduped: &str) -> Self {
        Self {
            collected: pool.lines().filter(|l| !l.trim().is_empty()).count(),
            unique: deduped.lines().filter(|l| !l.trim().is_empty()).count(),
        }
    }
}

/// What a melt produced, for display by the caller.
#[derive(Debug)]
pub struct MeltReport {
    pub library: String,
    pub guard: String,
    /// Per-unit line counts, in merge order.
    pub units: IndexMap<String, UnitLines>,
    pub declaration_includes: IncludeCounts,
    pub implementation_includes: IncludeCounts,
    /// Artifact location, resolved against the project root.
    pub output: PathBuf,
}
