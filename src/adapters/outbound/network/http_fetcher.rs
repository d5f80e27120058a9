use crate::dependency_resolution::domain::SourceLocator;
use crate::ports::outbound::IndexFetcher;
use crate::shared::error::DepsError;
use crate::shared::security::MAX_INDEX_SIZE;
use crate::shared::Result;
use std::io::Read;
use std::time::Duration;
use tracing::{debug, info};

/// HttpIndexFetcher adapter for downloading package indexes from a mirror
///
/// This adapter implements the IndexFetcher port with a blocking reqwest
/// client. Transparent decompression is left off so the payload reaches the
/// decoder exactly as served. Failures are not retried.
pub struct HttpIndexFetcher {
    client: reqwest::blocking::Client,
}

impl HttpIndexFetcher {
    /// Creates a fetcher with the default timeout and user agent
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(60))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("deb-deps/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    fn download(&self, url: &str) -> std::result::Result<Vec<u8>, String> {
        let response = self.client.get(url).send().map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("server returned status code {}", status));
        }

        if let Some(length) = response.content_length() {
            debug!(url, length, "downloading index");
            if length > MAX_INDEX_SIZE {
                return Err(format!(
                    "index is too large ({} bytes, maximum is {} bytes)",
                    length, MAX_INDEX_SIZE
                ));
            }
        }

        let mut body = Vec::new();
        response
            .take(MAX_INDEX_SIZE + 1)
            .read_to_end(&mut body)
            .map_err(|e| e.to_string())?;

        if body.len() as u64 > MAX_INDEX_SIZE {
            return Err(format!(
                "index exceeds the maximum size of {} bytes",
                MAX_INDEX_SIZE
            ));
        }

        Ok(body)
    }
}

// Note: no Default implementation, since building the client can fail.

impl IndexFetcher for HttpIndexFetcher {
    fn fetch(&self, locator: &SourceLocator) -> Result<Vec<u8>> {
        let url = match locator {
            SourceLocator::Remote(url) => url,
            SourceLocator::Local(_) => {
                anyhow::bail!("{} is a local path, not a URL", locator);
            }
        };

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DepsError::SourceUnavailable {
                locator: url.clone(),
                details: "only http:// and https:// URLs are supported".to_string(),
            }
            .into());
        }

        let body = self
            .download(url)
            .map_err(|details| DepsError::SourceUnavailable {
                locator: url.clone(),
                details,
            })?;

        info!(url = %url, bytes = body.len(), "fetched index");
        Ok(body)
    }
}
