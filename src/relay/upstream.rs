//! Upstream — the Wallhaven search API the relay forwards to.

use axum::body::Bytes;
use reqwest::Client;
use tracing::debug;

use super::config::Secret;
use super::error::RelayError;

/// Filter parameters the relay pins on every upstream search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    pub per_page: u32,
    /// General / anime / people bitmask.
    pub categories: &'static str,
    /// SFW / sketchy / NSFW bitmask.
    pub purity: &'static str,
    pub sorting: &'static str,
    pub order: &'static str,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            per_page: 24,
            categories: "111",
            purity: "100",
            sorting: "date_added",
            order: "desc",
        }
    }
}

/// HTTP client bound to one upstream search endpoint.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: Client,
    search_url: String,
    api_key: Option<Secret>,
    filters: SearchFilters,
}

impl Upstream {
    /// `base_url` is the API root, e.g. `https://wallhaven.cc/api/v1`.
    pub fn new(client: Client, base_url: &str, api_key: Option<Secret>) -> Self {
        Self {
            client,
            search_url: format!("{}/search", base_url.trim_end_matches('/')),
            api_key,
            filters: SearchFilters::default(),
        }
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Query string sent upstream for one caller request, credential included.
    pub fn search_params(&self, page: u32, query: &str) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(8);
        if let Some(key) = &self.api_key {
            params.push(("apikey", key.expose().to_string()));
        }
        params.extend([
            ("page", page.to_string()),
            ("per_page", self.filters.per_page.to_string()),
            ("categories", self.filters.categories.to_string()),
            ("purity", self.filters.purity.to_string()),
            ("sorting", self.filters.sorting.to_string()),
            ("order", self.filters.order.to_string()),
            ("q", query.to_string()),
        ]);
        params
    }

    /// Run one search and return the raw response body.
    pub async fn search(&self, page: u32, query: &str) -> Result<Bytes, RelayError> {
        debug!(page, query, "relaying search upstream");

        let response = self
            .client
            .get(&self.search_url)
            .query(&self.search_params(page, query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status(status.as_u16()));
        }

        Ok(response.bytes().await?)
    }
}
