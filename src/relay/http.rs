//! HTTP surface of the relay.
//!
//! ## Routes
//!
//! - `GET /api/wallpapers?page=<int>&q=<text>` — relayed search. Body is the
//!   upstream JSON, untouched; any upstream failure becomes
//!   `500 {"error":"Failed to fetch wallpapers"}`.
//! - anything else — a file from the public directory, or `index.html` so
//!   client-side routes resolve.

use std::num::NonZeroU32;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::error;

use super::error::RelayError;
use super::upstream::Upstream;
use crate::WALLPAPERS_PATH;

/// Shared, immutable relay state.
#[derive(Debug, Clone)]
pub struct RelayState {
    pub upstream: Upstream,
}

impl RelayState {
    pub fn new(upstream: Upstream) -> Arc<Self> {
        Arc::new(Self { upstream })
    }
}

/// Raw caller input. Both fields are optional and `page` is parsed leniently.
#[derive(Debug, Default, Deserialize)]
pub struct WallpaperQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

impl WallpaperQuery {
    /// Requested page; missing, zero or non-numeric values mean page 1.
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<NonZeroU32>().ok())
            .map_or(1, NonZeroU32::get)
    }

    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

/// Build the relay router: the search route plus static files with SPA
/// fallback from `public_dir`.
pub fn router(state: Arc<RelayState>, public_dir: impl AsRef<Path>) -> Router {
    let public_dir = public_dir.as_ref();
    let assets =
        ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join("index.html")));

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(tower_http::cors::Any)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(WALLPAPERS_PATH, get(wallpapers_handler))
        .fallback_service(assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /api/wallpapers` — forward one search upstream.
async fn wallpapers_handler(
    State(state): State<Arc<RelayState>>,
    Query(params): Query<WallpaperQuery>,
) -> Result<Response, RelayError> {
    let page = params.page();
    let query = params.query();

    match state.upstream.search(page, query).await {
        Ok(body) => Ok(([(CONTENT_TYPE, "application/json")], body).into_response()),
        Err(e) => {
            error!(page, query, error = %e, "Failed to fetch wallpapers");
            Err(e)
        }
    }
}
