use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::models::{SearchRequest, SearchResult};

/// Error body returned by the server on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client backend that delegates searches to a running
/// `tocsearch serve`.
pub struct HttpSearchBackend {
    client: Client,
    base_url: String,
}

impl HttpSearchBackend {
    /// Create a new HTTP backend targeting the given base URL
    /// (e.g. "http://127.0.0.1:8501").
    pub fn new<S: Into<String>>(base_url: S) -> Result<Self> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Execute a search via `POST /v1/search`, returning a
    /// deserialized `SearchResult`.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
        self.post_json("/v1/search", request)
    }

    fn post_json<T, R>(&self, path: &str, body: &T) -> Result<R>
    where
        T: Serialize,
        R: serde::de::DeserializeOwned,
    {
        let url = self.url_for(path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .with_context(|| format!("failed to send request to {}", url))?;

        let status = response.status();
        if !status.is_success() {
            // Surface the server's own message (e.g. a dataset load failure).
            let message = response
                .json::<ErrorBody>()
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("server returned {status} for {url}"));
            bail!(message);
        }

        let value = response
            .json::<R>()
            .context("failed to decode JSON response from server")?;

        Ok(value)
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
