//! Error types for the relay.

use std::error::Error;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Message returned to the browser for every upstream failure.
pub const FETCH_FAILED: &str = "Failed to fetch wallpapers";

/// Why a relayed search did not produce a body.
///
/// Only the server log sees the variant; callers always get the same
/// generic 500 response.
#[derive(Debug)]
pub enum RelayError {
    /// Connecting to or reading from the upstream failed.
    Transport(reqwest::Error),
    /// The upstream answered with a non-success status.
    Status(u16),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::Transport(e) => write!(f, "upstream transport error: {}", e),
            RelayError::Status(status) => write!(f, "upstream returned status {}", status),
        }
    }
}

impl Error for RelayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RelayError::Transport(e) => Some(e),
            RelayError::Status(_) => None,
        }
    }
}

// reqwest errors print the request URL, which carries the API key.
impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Transport(err.without_url())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": FETCH_FAILED })),
        )
            .into_response()
    }
}

/// Failure to bind or run the relay server.
#[derive(Debug)]
pub enum ServeError {
    Bind { address: String, source: std::io::Error },
    Serve(std::io::Error),
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServeError::Bind { address, source } => {
                write!(f, "failed to bind {}: {}", address, source)
            }
            ServeError::Serve(e) => write!(f, "server error: {}", e),
        }
    }
}

impl Error for ServeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServeError::Bind { source, .. } => Some(source),
            ServeError::Serve(e) => Some(e),
        }
    }
}
