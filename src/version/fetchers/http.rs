//! reqwest-backed fetcher implementation

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::FETCH_TIMEOUT_MS;
use crate::version::error::FetchError;
use crate::version::fetcher::Fetcher;

/// Fetcher implementation issuing plain HTTP GET requests
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Creates a new HttpFetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent("driver-resolver")
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Creates a new HttpFetcher with the default timeout
    pub fn with_default_timeout() -> Result<Self, FetchError> {
        Self::new(Duration::from_millis(FETCH_TIMEOUT_MS))
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_body(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();

        if !status.is_success() {
            warn!("Server returned status {}: {}", status, url);
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_body_returns_response_text() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/last-known-good-versions-with-downloads.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"timestamp": "2023-11-15T08:09:24.584Z", "channels": {}}"#)
            .create_async()
            .await;

        let fetcher = HttpFetcher::with_default_timeout().unwrap();
        let url = format!(
            "{}/last-known-good-versions-with-downloads.json",
            server.url()
        );
        let body = fetcher.fetch_body(&url).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            body,
            r#"{"timestamp": "2023-11-15T08:09:24.584Z", "channels": {}}"#
        );
    }

    #[tokio::test]
    async fn fetch_body_returns_status_error_for_404() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/missing.json")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let fetcher = HttpFetcher::with_default_timeout().unwrap();
        let url = format!("{}/missing.json", server.url());
        let result = fetcher.fetch_body(&url).await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(FetchError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn fetch_body_returns_status_error_for_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(503)
            .create_async()
            .await;

        let fetcher = HttpFetcher::with_default_timeout().unwrap();
        let result = fetcher.fetch_body(&format!("{}/", server.url())).await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(FetchError::Status { status: 503, .. })
        ));
    }
}
