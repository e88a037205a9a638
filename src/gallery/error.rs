use std::fmt;

/// Error type for fetching a result page.
///
/// The `Display` text is what ends up in the session's `error` field, so it
/// is phrased for the person looking at the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The relay answered with a non-success status.
    Status(u16),
    /// The request never produced a response.
    Transport(String),
    /// The body did not match the result page schema.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(status) => write!(f, "HTTP error! status: {}", status),
            FetchError::Transport(msg) => write!(f, "failed to fetch wallpapers: {}", msg),
            FetchError::Decode(msg) => write!(f, "unexpected catalog response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
