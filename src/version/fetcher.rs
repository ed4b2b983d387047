//! Fetcher trait for retrieving raw manifest bodies

#[cfg(test)]
use mockall::automock;

use crate::version::error::FetchError;

/// Trait for fetching the raw body of a remote document
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the body at `url` as text
    ///
    /// # Returns
    /// * `Ok(String)` - The response body
    /// * `Err(FetchError)` - On network failure or a non-success status
    async fn fetch_body(&self, url: &str) -> Result<String, FetchError>;
}
