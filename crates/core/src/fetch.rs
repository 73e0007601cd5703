//! Page fetching over HTTP.
//!
//! The HTTP client is built once from a [`FetchConfig`] and reused for every
//! scrape; nothing here holds process-wide state.

use std::time::Duration;

use reqwest::{Client, redirect};
use url::Url;

use crate::{Result, ScrapeError};

/// Desktop Chrome identity sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP client configuration for fetching listing pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent string.
    pub user_agent: String,
    /// Maximum number of redirects to follow.
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: DEFAULT_USER_AGENT.to_string(), max_redirects: 5 }
    }
}

impl FetchConfig {
    /// Builds the shared client for this configuration.
    pub fn build_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(self.timeout))
            .redirect(redirect::Policy::limited(self.max_redirects))
            .user_agent(&self.user_agent)
            .build()
            .map_err(ScrapeError::from)
    }
}

/// Fetches `url` and returns the body text.
///
/// Any status below 400 counts as success. Higher statuses and transport
/// failures become [`ScrapeError::Fetch`]; elapsed timeouts become
/// [`ScrapeError::Timeout`].
pub async fn fetch_url(client: &Client, url: &Url, config: &FetchConfig) -> Result<String> {
    let response = client
        .get(url.clone())
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ScrapeError::Timeout { timeout: config.timeout }
            } else {
                ScrapeError::from(e)
            }
        })?;

    let status = response.status();
    if status.as_u16() >= 400 {
        return Err(ScrapeError::Fetch(format!(
            "Request failed with status code {}",
            status.as_u16()
        )));
    }

    tracing::debug!(url = %url, status = status.as_u16(), final_url = %response.url(), "fetched page");

    let content = response.text().await?;

    Ok(content)
}
