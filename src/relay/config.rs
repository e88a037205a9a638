use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_UPSTREAM_URL: &str = "https://wallhaven.cc/api/v1";

/// A credential that must never reach a log line or a response.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value, reason } => {
                write!(f, "invalid {} value {:?}: {}", key, value, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Relay settings, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_key: Option<Secret>,
    pub public_dir: PathBuf,
    pub upstream_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: None,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
        }
    }
}

impl Config {
    /// Load from the process environment, after merging a `.env` file if one
    /// exists in the working directory.
    pub fn load() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_ok() {
            info!("Loaded .env file");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("WALLHAVEN_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .map(Secret::new);
        if api_key.is_none() {
            warn!("WALLHAVEN_API_KEY not set, relaying without an API key");
        }

        Ok(Self {
            port: try_load(&lookup, "PORT", DEFAULT_PORT)?,
            api_key,
            public_dir: lookup("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
            upstream_url: lookup("WALLHAVEN_API_URL")
                .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
        })
    }
}

fn try_load<L, T>(lookup: &L, key: &'static str, default: T) -> Result<T, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
