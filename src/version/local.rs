//! Enumeration of already downloaded driver binaries

use std::io;
use std::path::Path;

#[cfg(test)]
use mockall::automock;
use tracing::debug;

/// Trait for listing the file names inside the local driver directory
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait LocalFileLister: Send + Sync {
    /// Lists file names (not paths) in `dir`.
    /// A directory that does not exist yields an empty list.
    async fn list_files(&self, dir: &Path) -> Result<Vec<String>, io::Error>;
}

/// LocalFileLister backed by the real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct DirLister;

#[async_trait::async_trait]
impl LocalFileLister for DirLister {
    async fn list_files(&self, dir: &Path) -> Result<Vec<String>, io::Error> {
        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Driver directory {:?} does not exist", dir);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }

        // read_dir order is platform dependent
        names.sort();

        Ok(names)
    }
}

/// Find the first cached file named `<artifact>_<major>...`
pub fn find_local_candidate<'a>(
    file_names: &'a [String],
    artifact: &str,
    major: &str,
) -> Option<&'a str> {
    let prefix = format!("{artifact}_{major}");
    file_names
        .iter()
        .find(|name| name.starts_with(&prefix))
        .map(String::as_str)
}

/// Extract the version from a cached file name.
///
/// Examples:
/// - "chromedriver_120.0.6099.5" -> "120.0.6099.5"
/// - "chromedriver_120.0.6099.5.exe" -> "120.0.6099.5"
pub fn version_from_file_name(file_name: &str) -> &str {
    let version = file_name
        .rsplit_once('_')
        .map_or(file_name, |(_, version)| version);
    version.strip_suffix(".exe").unwrap_or(version)
}
