use async_trait::async_trait;

use super::{FetchError, WallpaperFetcher};
use crate::catalog::ResultPage;
use crate::WALLPAPERS_PATH;

/// Fetches result pages from a relay over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFetcher {
    /// `base_url` is the relay origin, e.g. `http://localhost:3001`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), WALLPAPERS_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WallpaperFetcher for HttpFetcher {
    async fn fetch_page(&self, page: u32, query: &str) -> Result<ResultPage, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("page", page.to_string()), ("q", query.to_string())])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(serde_json::from_slice(&body)?)
    }
}
