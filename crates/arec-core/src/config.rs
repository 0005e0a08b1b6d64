//! Configuration for the arec tool
//!
//! All configuration comes from environment variables, read once at startup:
//!
//! - `INFOMANIAK_API_TOKEN` (required): bearer token for the Infomaniak API
//! - `AREC_API_BASE` (default `https://api.infomaniak.com`)
//! - `AREC_HTTP_TIMEOUT_SECS` (default 30, range 1..=300)
//! - `AREC_LOG_LEVEL` (default `warn`)

use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable holding the API bearer token
pub const TOKEN_ENV: &str = "INFOMANIAK_API_TOKEN";

/// Default API endpoint
pub const DEFAULT_API_BASE: &str = "https://api.infomaniak.com";

/// Default per-request HTTP timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration, loaded from the environment
#[derive(Clone)]
pub struct Config {
    /// API bearer token
    /// Never log this value
    pub api_token: String,

    /// Base URL of the API endpoint
    pub api_base: String,

    /// Per-request HTTP timeout
    pub http_timeout: Duration,

    /// Log level name (trace, debug, info, warn, error)
    pub log_level: String,
}

// The token never appears in Debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<REDACTED>")
            .field("api_base", &self.api_base)
            .field("http_timeout", &self.http_timeout)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    ///
    /// `from_env` delegates here; tests inject a lookup instead of mutating
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_token = match lookup(TOKEN_ENV) {
            Some(token) if !token.trim().is_empty() => token,
            _ => return Err(Error::MissingCredential(TOKEN_ENV.to_string())),
        };

        let api_base = lookup("AREC_API_BASE")
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match lookup("AREC_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                Error::config(format!(
                    "AREC_HTTP_TIMEOUT_SECS must be an integer number of seconds. Got: {raw}"
                ))
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let log_level = lookup("AREC_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());

        let config = Self {
            api_token,
            api_base,
            http_timeout: Duration::from_secs(timeout_secs),
            log_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.api_base.starts_with("https://") && !self.api_base.starts_with("http://") {
            return Err(Error::config(format!(
                "AREC_API_BASE must use HTTP or HTTPS scheme. Got: {}",
                self.api_base
            )));
        }

        let secs = self.http_timeout.as_secs();
        if !(1..=300).contains(&secs) {
            return Err(Error::config(format!(
                "AREC_HTTP_TIMEOUT_SECS must be between 1 and 300 seconds. Got: {secs}"
            )));
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(Error::config(format!(
                    "AREC_LOG_LEVEL '{other}' is not valid. \
                    Valid levels: trace, debug, info, warn, error"
                )));
            }
        }

        Ok(())
    }
}
