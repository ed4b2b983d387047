use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

// =============================================================================
// Remote endpoints
// =============================================================================

/// Chrome for Testing "last known good version" per channel
pub const DEFAULT_CHANNEL_MANIFEST_URL: &str =
    "https://googlechromelabs.github.io/chrome-for-testing/last-known-good-versions-with-downloads.json";

/// Chrome for Testing list of every known good version
pub const DEFAULT_VERSIONS_MANIFEST_URL: &str =
    "https://googlechromelabs.github.io/chrome-for-testing/known-good-versions-with-downloads.json";

/// Legacy chromedriver object-storage bucket
pub const DEFAULT_BUCKET_LISTING_URL: &str = "https://chromedriver.storage.googleapis.com/";

/// Prefix of cached driver file names (`chromedriver_<version>[.exe]`)
pub const DEFAULT_ARTIFACT_NAME: &str = "chromedriver";

/// Log file written inside the data directory
pub const LOG_FILE_NAME: &str = "driver-resolver.log";

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Resolver configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    pub endpoints: EndpointsConfig,
    /// Directory holding already downloaded driver binaries
    pub binary_dir: PathBuf,
    /// File name prefix of cached driver binaries
    pub artifact_name: String,
    /// Upper bound for the legacy bucket listing lookup (e.g. "2.46")
    pub max_version: Option<String>,
    /// HTTP request timeout in milliseconds, `FETCH_TIMEOUT_MS` when unset
    pub request_timeout_ms: Option<u64>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoints: EndpointsConfig::default(),
            binary_dir: data_dir().join("selenium"),
            artifact_name: DEFAULT_ARTIFACT_NAME.to_string(),
            max_version: None,
            request_timeout_ms: None,
        }
    }
}

/// Remote manifest locations
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EndpointsConfig {
    pub channel_manifest: String,
    pub versions_manifest: String,
    pub bucket_listing: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            channel_manifest: DEFAULT_CHANNEL_MANIFEST_URL.to_string(),
            versions_manifest: DEFAULT_VERSIONS_MANIFEST_URL.to_string(),
            bucket_listing: DEFAULT_BUCKET_LISTING_URL.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Load the configuration from a JSON file.
    /// A missing file yields the default configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the data directory for driver-resolver.
/// Uses $XDG_DATA_HOME/driver-resolver if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/driver-resolver,
/// or ./driver-resolver if neither is available.
pub fn data_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the config directory for driver-resolver.
pub fn config_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn dir_with_env(xdg_home: Option<String>, home_dir: Option<PathBuf>, fallback: &str) -> PathBuf {
    let base = xdg_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(fallback)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join("driver-resolver")
}
