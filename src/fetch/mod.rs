//! Content fetching - retrieves raw Markdown over HTTP or from a site directory

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure modes for a single content fetch
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed (connection refused, DNS, timeout)
    #[error("request failed: {0}")]
    Request(String),

    /// The request completed with a non-success status
    #[error("HTTP error, status code {0}")]
    Status(u16),

    /// The response body could not be decoded as text
    #[error("failed to read response body: {0}")]
    Read(String),
}

/// Fetches a text resource by its site-relative path
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch_text(&self, resource: &str) -> Result<String, FetchError>;
}

/// Fetches content over HTTP from a base URL
pub struct HttpFetcher {
    client: reqwest::Client,
    base: reqwest::Url,
}

impl HttpFetcher {
    /// Create a fetcher rooted at the given base URL
    pub fn new(mut base: reqwest::Url) -> Self {
        // Relative joins drop the last path segment unless the base ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Self {
            client: reqwest::Client::new(),
            base,
        }
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch_text(&self, resource: &str) -> Result<String, FetchError> {
        let url = self
            .base
            .join(resource.trim_start_matches('/'))
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Read(e.to_string()))
    }
}

/// Fetches content from a local site directory
pub struct FileFetcher {
    base_dir: PathBuf,
}

impl FileFetcher {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ContentFetcher for FileFetcher {
    async fn fetch_text(&self, resource: &str) -> Result<String, FetchError> {
        // Resource paths arrive URL-encoded; file names are not
        let resource = percent_decode_str(resource.trim_start_matches('/'))
            .decode_utf8_lossy()
            .into_owned();
        let path = self.base_dir.join(resource);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // What a static file server would answer for a missing file
                return Err(FetchError::Status(404));
            }
            Err(e) => return Err(FetchError::Request(e.to_string())),
        };

        String::from_utf8(bytes).map_err(|e| FetchError::Read(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_file_fetcher_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("md")).unwrap();
        fs::write(dir.path().join("md/home.md"), "# Welcome").unwrap();

        let fetcher = FileFetcher::new(dir.path());
        let text = fetcher.fetch_text("md/home.md").await.unwrap();
        assert_eq!(text, "# Welcome");
    }

    #[tokio::test]
    async fn test_file_fetcher_decodes_resource() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("my page.md"), "hi").unwrap();

        let fetcher = FileFetcher::new(dir.path());
        let text = fetcher.fetch_text("my%20page.md").await.unwrap();
        assert_eq!(text, "hi");
    }

    #[tokio::test]
    async fn test_file_fetcher_missing_is_404() {
        let dir = tempfile::tempdir().unwrap();

        let fetcher = FileFetcher::new(dir.path());
        let err = fetcher.fetch_text("md/home.md").await.unwrap_err();
        match err {
            FetchError::Status(status) => assert_eq!(status, 404),
            other => panic!("expected Status(404), got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_file_fetcher_invalid_utf8_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.md"), [0xff, 0xfe, 0x00]).unwrap();

        let fetcher = FileFetcher::new(dir.path());
        let err = fetcher.fetch_text("bad.md").await.unwrap_err();
        assert!(matches!(err, FetchError::Read(_)));
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(
            FetchError::Status(404).to_string(),
            "HTTP error, status code 404"
        );
        assert!(FetchError::Request("connection refused".to_string())
            .to_string()
            .contains("connection refused"));
    }
}
