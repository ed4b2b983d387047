//! Normalization of chromedriver version strings
//!
//! Chromedriver does not follow semantic versioning: old releases have two
//! components ("2.46") and newer ones four ("75.0.3770.8"). Both are brought
//! to three components so they can be compared:
//!
//! - "2.46" -> "2.46.0"
//! - "75.0.3770.8" -> "75.0.3770"

use std::sync::LazyLock;

use regex::Regex;

/// `<major>.<minor>` anywhere in the string
static MAJOR_MINOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+\.[0-9]+)").expect("valid regex"));

/// `<major>.<minor>.<patch>.<build>` anywhere in the string
static FOUR_PART_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+\.[0-9]+\.[0-9]+)\.[0-9]+").expect("valid regex"));

/// Normalize a version string to `<major>.<minor>.<patch>`.
///
/// A four component match takes precedence over a two component one.
/// Returns an empty string when nothing matches.
pub fn normalize(raw: &str) -> String {
    if let Some(caps) = FOUR_PART_RE.captures(raw) {
        return caps[1].to_string();
    }

    MAJOR_MINOR_RE
        .captures(raw)
        .map(|caps| format!("{}.0", &caps[1]))
        .unwrap_or_default()
}

/// Leading component of a version, up to the first dot.
pub fn major(version: &str) -> &str {
    version.split('.').next().unwrap_or_default()
}
