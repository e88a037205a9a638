use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};
use wallhaven_gallery::relay::{self, Config};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Environment misconfigured: {e}");
            return ExitCode::FAILURE;
        }
    };

    match relay::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
