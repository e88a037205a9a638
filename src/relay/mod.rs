//! Relay — forwards gallery searches to Wallhaven with a server-side key.
//!
//! Requires the `http` feature. Uses axum for routing and reqwest for the
//! upstream call. The relay is stateless per request: it holds a
//! `reqwest::Client` and its configuration, nothing else.
//!
//! ```text
//!   browser ──GET /api/wallpapers?page&q──► relay ──+apikey, filters──► wallhaven
//!           ◄──────── upstream JSON / 500 ─────────┘
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use wallhaven_gallery::relay::{self, Config};
//!
//! let config = Config::load()?;
//!
//! // Get the router to compose with other axum routes
//! let app = relay::router(relay::state(&config), &config.public_dir);
//!
//! // Or serve directly, until Ctrl+C / SIGTERM
//! relay::run(config).await?;
//! ```

mod config;
mod error;
mod http;
mod upstream;

pub use config::{
    Config, ConfigError, Secret, DEFAULT_PORT, DEFAULT_PUBLIC_DIR, DEFAULT_UPSTREAM_URL,
};
pub use error::{RelayError, ServeError, FETCH_FAILED};
pub use http::{router, RelayState, WallpaperQuery};
pub use upstream::{SearchFilters, Upstream};

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

/// Build the relay state for `config`.
pub fn state(config: &Config) -> Arc<RelayState> {
    RelayState::new(Upstream::new(
        reqwest::Client::new(),
        &config.upstream_url,
        config.api_key.clone(),
    ))
}

/// Serve the relay at `addr` (e.g. `"0.0.0.0:3001"`) until the process is
/// asked to stop.
pub async fn serve(config: &Config, addr: &str) -> Result<(), ServeError> {
    let app = router(state(config), &config.public_dir);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind {
            address: addr.to_string(),
            source,
        })?;
    info!("Server running at http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Serve)?;

    info!("Server shut down");
    Ok(())
}

/// Serve on all interfaces at the configured port.
pub async fn run(config: Config) -> Result<(), ServeError> {
    let address = format!("0.0.0.0:{}", config.port);
    info!(
        public_dir = %config.public_dir.display(),
        upstream = %config.upstream_url,
        "Starting relay"
    );
    serve(&config, &address).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
