//! Environment-driven server configuration.

use std::net::SocketAddr;
use std::time::Duration;

use newscan_core::FetchConfig;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidSeconds { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Runtime settings for `newscan-server`.
///
/// | variable                  | default        |
/// |---------------------------|----------------|
/// | `NEWSCAN_ADDR`            | `0.0.0.0:3001` |
/// | `NEWSCAN_FETCH_TIMEOUT`   | `30`           |
/// | `NEWSCAN_USER_AGENT`      | desktop Chrome |
/// | `NEWSCAN_REQUEST_TIMEOUT` | `60`           |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub fetch: FetchConfig,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3001)),
            fetch: FetchConfig::default(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("NEWSCAN_ADDR") {
            config.addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr { var: "NEWSCAN_ADDR", value })?;
        }

        if let Some(value) = lookup("NEWSCAN_FETCH_TIMEOUT") {
            config.fetch.timeout = parse_seconds("NEWSCAN_FETCH_TIMEOUT", value)?;
        }

        if let Some(value) = lookup("NEWSCAN_USER_AGENT") {
            let value = value.trim();
            if value.is_empty() {
                return Err(ConfigError::Empty { var: "NEWSCAN_USER_AGENT" });
            }
            config.fetch.user_agent = value.to_string();
        }

        if let Some(value) = lookup("NEWSCAN_REQUEST_TIMEOUT") {
            config.request_timeout = Duration::from_secs(parse_seconds("NEWSCAN_REQUEST_TIMEOUT", value)?);
        }

        Ok(config)
    }
}

fn parse_seconds(var: &'static str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidSeconds { var, value }),
    }
}
