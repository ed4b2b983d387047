//! Chrome for Testing JSON manifests
//!
//! Two documents are supported:
//! - `last-known-good-versions-with-downloads.json`: one record per channel
//! - `known-good-versions-with-downloads.json`: every published record

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::platform::Platform;

/// Channel consulted for "latest"
pub const STABLE_CHANNEL: &str = "Stable";

/// A single downloadable archive
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Download {
    pub platform: String,
    pub url: String,
}

/// Downloads of one version, grouped by artifact kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Downloads {
    pub chrome: Vec<Download>,
    #[serde(rename = "chromedriver")]
    pub driver: Vec<Download>,
    #[serde(rename = "chrome-headless-shell")]
    pub headless_shell: Vec<Download>,
}

/// One published version
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionRecord {
    pub version: String,
    pub revision: String,
    #[serde(default)]
    pub downloads: Downloads,
}

impl VersionRecord {
    /// Driver download for `platform`, if published
    pub fn driver_download(&self, platform: Platform) -> Option<&Download> {
        self.downloads
            .driver
            .iter()
            .find(|d| d.platform == platform.as_str())
    }
}

/// Last known good version per release channel
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelManifest {
    pub timestamp: DateTime<Utc>,
    pub channels: HashMap<String, VersionRecord>,
}

impl ChannelManifest {
    pub fn stable(&self) -> Option<&VersionRecord> {
        self.channels.get(STABLE_CHANNEL)
    }
}

/// Every known good version, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionsManifest {
    pub timestamp: DateTime<Utc>,
    pub versions: Vec<VersionRecord>,
}

impl VersionsManifest {
    /// Exact lookup by version string; the first match wins
    pub fn find(&self, version: &str) -> Option<&VersionRecord> {
        self.versions.iter().find(|v| v.version == version)
    }
}

pub fn parse_channel_manifest(body: &str) -> Result<ChannelManifest, serde_json::Error> {
    serde_json::from_str(body)
}

pub fn parse_versions_manifest(body: &str) -> Result<VersionsManifest, serde_json::Error> {
    serde_json::from_str(body)
}
