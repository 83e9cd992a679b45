//! Widget configuration, read from the environment.
//!
//! - `NOTES_API_URL` - base URL of the notes API (default [`DEFAULT_API_URL`])
//! - `NOTES_ROLE` - `admin` shows mutation controls; anything else is a reader
//! - `NOTES_SESSION` - session cookie value forwarded with every request
//! - `NOTES_TIMEOUT_SECS` - request timeout; unset leaves the transport default

use crate::models::Role;
use crate::DEFAULT_API_URL;
use std::env;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const API_URL_VAR: &str = "NOTES_API_URL";
pub const ROLE_VAR: &str = "NOTES_ROLE";
pub const SESSION_VAR: &str = "NOTES_SESSION";
pub const TIMEOUT_VAR: &str = "NOTES_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        source: url::ParseError,
    },
    #[error("{var} must be an http(s) URL, got scheme {scheme:?}")]
    UnsupportedScheme { var: &'static str, scheme: String },
    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub api_base: Url,
    pub role: Role,
    pub session: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl WidgetConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_url = non_empty(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_base = Url::parse(raw_url.trim()).map_err(|source| ConfigError::InvalidUrl {
            var: API_URL_VAR,
            source,
        })?;
        if api_base.scheme() != "http" && api_base.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme {
                var: API_URL_VAR,
                scheme: api_base.scheme().to_string(),
            });
        }

        let role = non_empty(ROLE_VAR)
            .map(|flag| Role::from_flag(&flag))
            .unwrap_or_default();

        let request_timeout = match non_empty(TIMEOUT_VAR) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: TIMEOUT_VAR,
                        value,
                    })
                }
            },
            None => None,
        };

        Ok(Self {
            api_base,
            role,
            session: non_empty(SESSION_VAR),
            request_timeout,
        })
    }
}
