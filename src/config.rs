//! Client and server configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle cannot read process environment at runtime, so the
//! backend base URL is baked in at compile time. The SSR binary reads its
//! listen port from the environment (after `.env` loading).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {value:?}")]
    InvalidPort { value: String },
}

/// Settings shared by every page that talks to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_raw(None)
    }
}

impl ClientConfig {
    /// Build from the `SMARTBANK_API_URL` value captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("SMARTBANK_API_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let base = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self { api_base_url: base.trim_end_matches('/').to_owned() }
    }

    /// Absolute URL for a backend path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base_url)
        } else {
            format!("{}/{path}", self.api_base_url)
        }
    }
}

/// Settings for the SSR binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Read `PORT` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but is not a
    /// valid TCP port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}
