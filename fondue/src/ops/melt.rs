//! Melt operation - run the merge pipeline.

use std::path::Path;

use eyre::Result;
use fondue_manifest::Manifest;
use fondue_merge::Melter;

use crate::reports::MeltOutcome;

/// Execute the melt operation.
///
/// With `dry_run` the artifact is assembled but not written.
pub fn melt(manifest: &Manifest, root: &Path, dry_run: bool) -> Result<MeltOutcome> {
    let melter = Melter::new(manifest);
    if dry_run {
        let (text, report) = melter.preview(root)?;
        Ok(MeltOutcome::Preview { report, text })
    } else {
        let report = melter.melt(root)?;
        Ok(MeltOutcome::Written(report))
    }
}
