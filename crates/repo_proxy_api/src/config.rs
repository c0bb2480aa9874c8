//! Process configuration
//!
//! All settings come from environment variables and are read once at startup.
//! Loading goes through a lookup function so tests can supply their own
//! variables without touching the process environment.
//!
//! | Variable                   | Default                  |
//! |----------------------------|--------------------------|
//! | `GITHUB_TOKEN`             | required                 |
//! | `GITHUB_API_URL`           | `https://api.github.com` |
//! | `API_HOST`                 | `0.0.0.0`                |
//! | `API_PORT`                 | `8080`                   |
//! | `API_REQUEST_TIMEOUT_SECS` | `30`                     |
//! | `LOG_FORMAT`               | `text`                   |

use std::time::Duration;

use github_client::{GitHubToken, DEFAULT_API_URL};
use thiserror::Error;
use url::Url;

use crate::{logging::LogFormat, ApiConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const GITHUB_API_URL_VAR: &str = "GITHUB_API_URL";
pub const API_HOST_VAR: &str = "API_HOST";
pub const API_PORT_VAR: &str = "API_PORT";
pub const API_REQUEST_TIMEOUT_VAR: &str = "API_REQUEST_TIMEOUT_SECS";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Errors raised while reading configuration.
///
/// Messages name the offending variable but never repeat the token.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required environment variable {name} is not set")]
    MissingVariable { name: &'static str },

    #[error("Environment variable {name} is invalid: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Everything the proxy needs to start.
#[derive(Debug)]
pub struct ProxyConfig {
    /// Listener settings
    pub server: ApiConfig,

    /// Credential attached to every upstream call
    pub github_token: GitHubToken,

    /// Base URL of the GitHub REST API
    pub github_api_url: Url,

    /// Log output format
    pub log_format: LogFormat,
}

impl ProxyConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVariable` when `GITHUB_TOKEN` is absent and
    /// `ConfigError::InvalidValue` when a variable cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let github_token = lookup(GITHUB_TOKEN_VAR)
            .map(GitHubToken::new)
            .filter(|token| !token.is_blank())
            .ok_or(ConfigError::MissingVariable {
                name: GITHUB_TOKEN_VAR,
            })?;

        let github_api_url = match get(GITHUB_API_URL_VAR) {
            Some(raw) => parse_base_url(raw.trim())?,
            None => parse_base_url(DEFAULT_API_URL)?,
        };

        let host = get(API_HOST_VAR)
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        if host.parse::<std::net::IpAddr>().is_err() {
            return Err(ConfigError::InvalidValue {
                name: API_HOST_VAR,
                reason: format!("'{}' is not an IP address", host),
            });
        }

        let port = match get(API_PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: API_PORT_VAR,
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get(API_REQUEST_TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        name: API_REQUEST_TIMEOUT_VAR,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(secs) => secs,
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        name: API_REQUEST_TIMEOUT_VAR,
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let log_format = match get(LOG_FORMAT_VAR) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    name: LOG_FORMAT_VAR,
                    reason,
                })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            server: ApiConfig {
                port,
                host,
                request_timeout: Duration::from_secs(timeout_secs),
            },
            github_token,
            github_api_url,
            log_format,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        name: GITHUB_API_URL_VAR,
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidValue {
            name: GITHUB_API_URL_VAR,
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
