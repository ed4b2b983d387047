//! In-memory collaborators for resolver tests

use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use driver_resolver::config::ResolverConfig;
use driver_resolver::platform::Host;
use driver_resolver::version::error::FetchError;
use driver_resolver::version::fetcher::Fetcher;
use driver_resolver::version::local::LocalFileLister;
use driver_resolver::version::resolver::VersionResolver;

pub const CHANNELS_URL: &str = "http://test/last-known-good-versions-with-downloads.json";
pub const VERSIONS_URL: &str = "http://test/known-good-versions-with-downloads.json";
pub const BUCKET_URL: &str = "http://bucket/";

/// Fetcher serving fixed bodies by URL
#[derive(Default)]
pub struct StaticFetcher {
    bodies: HashMap<String, String>,
    calls: AtomicUsize,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: impl Into<String>) -> Self {
        self.bodies.insert(url.to_string(), body.into());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch_body(&self, url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}

/// Lister returning a fixed set of cached file names
#[derive(Default)]
pub struct StaticLister {
    files: Vec<String>,
}

impl StaticLister {
    pub fn new(files: &[&str]) -> Self {
        Self {
            files: files.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
impl LocalFileLister for StaticLister {
    async fn list_files(&self, _dir: &Path) -> Result<Vec<String>, io::Error> {
        Ok(self.files.clone())
    }
}

pub fn test_config(artifact_name: &str) -> ResolverConfig {
    let mut config = ResolverConfig::default();
    config.endpoints.channel_manifest = CHANNELS_URL.to_string();
    config.endpoints.versions_manifest = VERSIONS_URL.to_string();
    config.endpoints.bucket_listing = BUCKET_URL.to_string();
    config.artifact_name = artifact_name.to_string();
    config
}

/// Create a resolver for `host` over the given fakes, with cached files named `driver_<version>`
pub fn create_test_resolver(
    host: Host,
    fetcher: Arc<StaticFetcher>,
    lister: StaticLister,
) -> VersionResolver {
    VersionResolver::new(test_config("driver"), host, fetcher, Arc::new(lister))
}
