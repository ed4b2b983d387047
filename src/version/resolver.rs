//! Download URL resolution for chromedriver
//!
//! `get_url("latest")` reads the Stable channel of the last-known-good manifest
//! and prefers an already downloaded build of the same major version.
//! `get_url(<version>)` looks the exact version up in the known-good manifest.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::ResolverConfig;
use crate::platform::{Host, Platform};
use crate::version::error::ResolveError;
use crate::version::fetcher::Fetcher;
use crate::version::listing::{filter_version_list, latest_listed, parse_bucket_keys};
use crate::version::local::{LocalFileLister, find_local_candidate, version_from_file_name};
use crate::version::manifest::{STABLE_CHANNEL, parse_channel_manifest, parse_versions_manifest};
use crate::version::normalize::major;
use crate::version::types::{BinaryUrl, LATEST};

/// Resolves requested driver versions to download URLs for one host.
pub struct VersionResolver {
    config: ResolverConfig,
    host: Host,
    platform: Platform,
    fetcher: Arc<dyn Fetcher>,
    lister: Arc<dyn LocalFileLister>,
}

impl VersionResolver {
    pub fn new(
        config: ResolverConfig,
        host: Host,
        fetcher: Arc<dyn Fetcher>,
        lister: Arc<dyn LocalFileLister>,
    ) -> Self {
        let platform = host.platform();
        Self {
            config,
            host,
            platform,
            fetcher,
            lister,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Resolve `version` ("latest" or an exact version) to a download URL
    pub async fn get_url(&self, version: &str) -> Result<BinaryUrl, ResolveError> {
        if version == LATEST {
            self.latest_version().await
        } else {
            self.specific_version(version).await
        }
    }

    /// Bucket listing keys usable on this host, in listing order
    pub async fn get_version_list(&self) -> Result<Vec<String>, ResolveError> {
        let keys = self.fetch_bucket_keys().await?;
        Ok(filter_version_list(&keys, self.host.os, &self.host.arch))
    }

    /// Highest version published in the legacy bucket, capped by `maxVersion`
    pub async fn get_latest_listed(&self) -> Result<Option<BinaryUrl>, ResolveError> {
        let list = self.get_version_list().await?;
        Ok(latest_listed(
            &list,
            &self.config.endpoints.bucket_listing,
            self.config.max_version.as_deref(),
        ))
    }

    async fn latest_version(&self) -> Result<BinaryUrl, ResolveError> {
        let manifest_url = &self.config.endpoints.channel_manifest;
        let body = self.fetcher.fetch_body(manifest_url).await?;
        let manifest = parse_channel_manifest(&body).map_err(|source| {
            warn!("Failed to parse channel manifest: {}", source);
            ResolveError::Parse {
                url: manifest_url.clone(),
                source,
            }
        })?;

        let stable = manifest
            .stable()
            .ok_or_else(|| ResolveError::ChannelNotFound {
                channel: STABLE_CHANNEL.to_string(),
                manifest_url: manifest_url.clone(),
            })?;

        let download =
            stable
                .driver_download(self.platform)
                .ok_or_else(|| ResolveError::PlatformNotFound {
                    version: stable.version.clone(),
                    platform: self.platform,
                    manifest_url: manifest_url.clone(),
                })?;

        let latest = BinaryUrl {
            url: download.url.clone(),
            version: stable.version.clone(),
        };

        let local_files = self.lister.list_files(&self.config.binary_dir).await?;
        let resolved = reconcile_with_local(latest, &local_files, &self.config.artifact_name);

        info!("Resolved latest to {}", resolved.version);
        Ok(resolved)
    }

    async fn specific_version(&self, version: &str) -> Result<BinaryUrl, ResolveError> {
        let manifest_url = &self.config.endpoints.versions_manifest;
        let body = self.fetcher.fetch_body(manifest_url).await?;
        let manifest = parse_versions_manifest(&body).map_err(|source| {
            warn!("Failed to parse versions manifest: {}", source);
            ResolveError::Parse {
                url: manifest_url.clone(),
                source,
            }
        })?;

        let record = manifest
            .find(version)
            .ok_or_else(|| ResolveError::VersionNotFound {
                version: version.to_string(),
                manifest_url: manifest_url.clone(),
            })?;

        let download =
            record
                .driver_download(self.platform)
                .ok_or_else(|| ResolveError::PlatformNotFound {
                    version: version.to_string(),
                    platform: self.platform,
                    manifest_url: manifest_url.clone(),
                })?;

        Ok(BinaryUrl {
            url: download.url.clone(),
            version: version.to_string(),
        })
    }

    async fn fetch_bucket_keys(&self) -> Result<Vec<String>, ResolveError> {
        let url = &self.config.endpoints.bucket_listing;
        let body = self.fetcher.fetch_body(url).await?;

        parse_bucket_keys(&body).ok_or_else(|| {
            warn!("Bucket listing at {} is not a ListBucketResult", url);
            ResolveError::InvalidListing {
                url: url.clone(),
                reason: "missing ListBucketResult".to_string(),
            }
        })
    }
}

/// Prefer a cached build sharing the major version of `latest`.
///
/// The cached file `<artifact>_<version>[.exe]` only wins when its major
/// version equals the latest one. Its URL is the latest URL with the version
/// substituted, which matches the Chrome for Testing path layout.
pub fn reconcile_with_local(
    latest: BinaryUrl,
    local_files: &[String],
    artifact: &str,
) -> BinaryUrl {
    let latest_major = major(&latest.version);

    let local_version = find_local_candidate(local_files, artifact, latest_major)
        .map(version_from_file_name)
        .unwrap_or_default();
    let local_major = major(local_version);

    if !latest_major.is_empty() && latest_major == local_major {
        debug!("Using local {} instead of {}", local_version, latest.version);
        BinaryUrl {
            url: latest.url.replacen(&latest.version, local_version, 1),
            version: local_version.to_string(),
        }
    } else {
        latest
    }
}
