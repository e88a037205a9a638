use std::sync::Arc;

use async_trait::async_trait;

use super::FetchError;
use crate::catalog::ResultPage;

/// Source of result pages for the gallery controller.
///
/// The browser build talks to the relay over HTTP ([`super::HttpFetcher`]);
/// tests and offline tooling use [`super::InMemoryCatalog`].
#[async_trait]
pub trait WallpaperFetcher: Send + Sync {
    /// Fetch one page (1-based) of results for `query`.
    async fn fetch_page(&self, page: u32, query: &str) -> Result<ResultPage, FetchError>;
}

#[async_trait]
impl<F: WallpaperFetcher + ?Sized> WallpaperFetcher for Arc<F> {
    async fn fetch_page(&self, page: u32, query: &str) -> Result<ResultPage, FetchError> {
        (**self).fetch_page(page, query).await
    }
}
