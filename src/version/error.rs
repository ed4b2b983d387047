use thiserror::Error;

use crate::platform::Platform;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid manifest {url}: {source}")]
    Parse {
        url: String,
        source: serde_json::Error,
    },

    #[error("Invalid bucket listing {url}: {reason}")]
    InvalidListing { url: String, reason: String },

    #[error("Chrome version {version} not found in {manifest_url}")]
    VersionNotFound {
        version: String,
        manifest_url: String,
    },

    #[error("Channel {channel} not found in {manifest_url}")]
    ChannelNotFound {
        channel: String,
        manifest_url: String,
    },

    #[error(
        "Can't find download for platform {platform} for version {version} in {manifest_url}"
    )]
    PlatformNotFound {
        version: String,
        platform: Platform,
        manifest_url: String,
    },

    #[error("Failed to list local drivers: {0}")]
    LocalListing(#[from] std::io::Error),
}

impl ResolveError {
    /// Whether the error means "nothing matched" rather than a transport or decode failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ResolveError::VersionNotFound { .. }
                | ResolveError::ChannelNotFound { .. }
                | ResolveError::PlatformNotFound { .. }
        )
    }
}
