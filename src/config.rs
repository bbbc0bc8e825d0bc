//! Server configuration read from the process environment.
//!
//! `.env` files are loaded by `main` through `dotenvy` before this runs, so
//! local overrides and real environment variables look the same here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Error returned by [`ServerConfig::from_lookup`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("invalid EDGE_GATE value: {0:?}")]
    InvalidFlag(String),
}

/// Runtime settings for the HTTP server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Listen port (`PORT`, default 3000).
    pub port: u16,
    /// Whether the session-cookie edge gate runs (`EDGE_GATE`, default on).
    pub edge_gate: bool,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_owned());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        let edge_gate = match lookup("EDGE_GATE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidFlag(raw))?,
            None => true,
        };

        Ok(Self { host, port, edge_gate })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
