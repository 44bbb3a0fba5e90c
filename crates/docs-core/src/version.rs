//! Latest version tag selection.
//!
//! Only tags of the restricted form `v?MAJOR[.MINOR[.PATCH]]` are considered;
//! pre-release and build suffixes are ignored entirely. This is deliberately
//! not a semantic-versioning implementation.
//!
//! # Examples
//!
//! ```
//! use action_docs_core::version::{DEFAULT_VERSION, select_latest};
//!
//! let tags = ["v1.0.0", "v2.0.0", "nightly", "v1.9.9"];
//! assert_eq!(select_latest(&tags).as_deref(), Some("v2.0.0"));
//!
//! let tags = ["v1.0.0-beta"];
//! assert_eq!(select_latest(&tags).unwrap_or_else(|| DEFAULT_VERSION.to_string()), "main");
//! ```

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Version used when no suitable tag exists.
pub const DEFAULT_VERSION: &str = "main";

/// Sentinel meaning "detect the version from repository tags".
pub const AUTO_VERSION: &str = "auto";

static SEMVER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?[0-9]+(\.[0-9]+)?(\.[0-9]+)?$").expect("valid regex"));

/// Returns `true` if `tag` looks like `v1`, `1.2`, `v1.2.3`, ...
///
/// # Examples
///
/// ```
/// use action_docs_core::version::is_semver_like;
///
/// assert!(is_semver_like("v1"));
/// assert!(is_semver_like("1.2.3"));
/// assert!(!is_semver_like("v1.2.3.4"));
/// assert!(!is_semver_like("release-1"));
/// ```
#[must_use]
pub fn is_semver_like(tag: &str) -> bool {
    SEMVER_PATTERN.is_match(tag)
}

/// Numeric components of a matching tag. Values past `u64::MAX` saturate.
fn components(tag: &str) -> Vec<u64> {
    tag.strip_prefix('v')
        .unwrap_or(tag)
        .split('.')
        .map(|part| part.parse().unwrap_or(u64::MAX))
        .collect()
}

/// Compares component lists, treating missing trailing components as zero.
fn compare_components(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let left = a.get(i).copied().unwrap_or(0);
            let right = b.get(i).copied().unwrap_or(0);
            left.cmp(&right)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Returns matching tags ordered newest first.
///
/// Equal versions (for example `v1` and `v1.0.0`) keep their input order.
#[must_use]
pub fn sort_descending<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut matching: Vec<(Vec<u64>, &str)> = tags
        .iter()
        .map(AsRef::as_ref)
        .filter(|tag| is_semver_like(tag))
        .map(|tag| (components(tag), tag))
        .collect();

    matching.sort_by(|(a, _), (b, _)| compare_components(b, a));
    matching
        .into_iter()
        .map(|(_, tag)| tag.to_string())
        .collect()
}

/// Picks the highest semver-like tag.
///
/// Returns `None` when no tag matches; callers fall back to
/// [`DEFAULT_VERSION`].
#[must_use]
pub fn select_latest<S: AsRef<str>>(tags: &[S]) -> Option<String> {
    let latest = sort_descending(tags).into_iter().next();
    match &latest {
        Some(tag) => tracing::debug!(tag = %tag, "selected latest version tag"),
        None => tracing::debug!(count = tags.len(), "no semver-like tags found"),
    }
    latest
}
