//! Include pooling and deduplication.

use std::collections::BTreeSet;

/// Sort and deduplicate a pool of collected `#include` lines.
///
/// Lines are compared byte for byte, so entries that differ in spacing
/// or a trailing comment stay distinct. The result is newline-joined
/// with no trailing newline.
pub(crate) fn dedup_includes(pool: &str) -> String {
    let unique: BTreeSet<&str> = pool.lines().collect();
    unique.into_iter().collect::<Vec<_>>().join("\n")
}
