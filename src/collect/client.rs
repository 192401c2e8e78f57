use anyhow::{Context, Result};
use log::warn;
use reqwest::blocking::Client;

/// Thin wrapper over a blocking HTTP client for the upstream source files.
pub struct SourceClient {
    client: Client,
}

impl SourceClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("pokedex-collect")
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch a source file as text. A non-success HTTP status is the one
    /// recoverable failure: it is logged and reported as `None` so the caller
    /// can skip the resource. Transport errors propagate.
    pub fn fetch_text(&self, url: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Skipping data collection due to HTTP status code {}", status);
            return Ok(None);
        }

        let body = response
            .text()
            .with_context(|| format!("Failed to read response body from {}", url))?;
        Ok(Some(body))
    }
}
