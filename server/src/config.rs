//! Server configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CUSTOMER_API_URL: &str = "http://localhost:4000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// A variable was set to an empty value where one is required.
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Where and how to reach the backend customer API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerApiConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:4000`.
    pub base_url: String,
    pub timeouts: Timeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub customer_api: CustomerApiConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CUSTOMER_API_URL`: default `http://localhost:4000`
    /// - `CUSTOMER_API_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CUSTOMER_API_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable or empty value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let base_url = parse_base_url(lookup("CUSTOMER_API_URL").as_deref())?;
        let timeouts = Timeouts {
            request_secs: parse_secs(
                "CUSTOMER_API_REQUEST_TIMEOUT_SECS",
                lookup("CUSTOMER_API_REQUEST_TIMEOUT_SECS").as_deref(),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_secs(
                "CUSTOMER_API_CONNECT_TIMEOUT_SECS",
                lookup("CUSTOMER_API_CONNECT_TIMEOUT_SECS").as_deref(),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { port, customer_api: CustomerApiConfig { base_url, timeouts } })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { var: "PORT", value: value.to_owned() }),
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.unwrap_or(DEFAULT_CUSTOMER_API_URL).trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(ConfigError::Empty { var: "CUSTOMER_API_URL" });
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Invalid { var: "CUSTOMER_API_URL", value: url.to_owned() });
    }
    Ok(url.to_owned())
}

fn parse_secs(var: &'static str, raw: Option<&str>, default: u64) -> Result<u64, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(default),
        Some(value) => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::Invalid { var, value: value.to_owned() }),
        },
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
