//! Common types for version resolution

use serde::Serialize;

/// Sentinel version request resolved against the Stable channel
pub const LATEST: &str = "latest";

/// Resolved download location of a driver binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryUrl {
    pub url: String,
    pub version: String,
}
