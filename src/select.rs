//! Latest-per-release-line selection
//!
//! Given every version a repository has published and a minimum version,
//! picks the newest stable release of each minor line, newest first.

use crate::domain::Version;
use std::cmp::Ordering;

/// Select the latest stable version of each release line at or above `floor`.
///
/// Versions below `floor` and pre-releases are dropped. The result is strictly
/// descending and holds at most one version per (major, minor) pair, namely
/// the highest patch of that line. Empty input yields an empty result.
pub fn select_latest_per_line(versions: &[Version], floor: &Version) -> Vec<Version> {
    let mut candidates: Vec<Version> = versions
        .iter()
        .filter(|v| v.is_stable() && v.compare(floor) != Ordering::Less)
        .cloned()
        .collect();

    sort_descending(&mut candidates);
    dedup_by_line(candidates)
}

/// Sort newest first using the canonical version ordering
fn sort_descending(versions: &mut [Version]) {
    versions.sort_by(|a, b| b.compare(a));
}

/// Keep the first version of every run of equal release lines.
///
/// `sorted` must be in descending order; the first version seen for a line
/// is then its maximum.
fn dedup_by_line(sorted: Vec<Version>) -> Vec<Version> {
    debug_assert!(
        sorted
            .windows(2)
            .all(|w| w[0].compare(&w[1]) != Ordering::Less),
        "dedup_by_line requires descending input"
    );

    let mut result: Vec<Version> = Vec::with_capacity(sorted.len());
    for version in sorted {
        match result.last() {
            Some(kept) if kept.release_line() == version.release_line() => {}
            _ => result.push(version),
        }
    }
    result
}
