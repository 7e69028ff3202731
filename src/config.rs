//! Transport configuration baked in at build time.
//!
//! The browser bundle has no process environment, so overrides are read with
//! `option_env!` when the crate is compiled:
//! - `LIBRARY_API_BASE`: API root URL, default `http://localhost:8080/api`
//! - `LIBRARY_API_TIMEOUT_MS`: per-request timeout, default 10000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Key of the durable storage slot holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "jwtToken";

/// Base URL, timeout and default headers for one HTTP transport.
///
/// The session client and the general API client each own a copy so that
/// auth checks never share request handling with ordinary API traffic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub headers: Vec<(String, String)>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ApiConfig {
    /// Build config from the values captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("LIBRARY_API_BASE"), option_env!("LIBRARY_API_TIMEOUT_MS"))
    }

    /// Build config from raw optional values, falling back to defaults for
    /// anything missing, blank or unparsable.
    #[must_use]
    pub fn from_values(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        Self {
            base_url: parse_base_url(base_url),
            timeout: Duration::from_millis(parse_timeout_ms(timeout_ms)),
            headers: vec![("Content-Type".to_owned(), "application/json".to_owned())],
        }
    }

    /// Absolute URL for an endpoint path such as `/auth/me`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Timeout in whole milliseconds, saturated to what browser timers accept.
    #[must_use]
    pub fn timeout_ms(&self) -> u32 {
        u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX)
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE.to_owned(),
    }
}

fn parse_timeout_ms(raw: Option<&str>) -> u64 {
    match raw.map(|v| v.trim().parse::<u64>()) {
        Some(Ok(ms)) if ms > 0 => ms,
        _ => DEFAULT_TIMEOUT_MS,
    }
}
