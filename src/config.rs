//! Backend address configuration.
//!
//! The base URL is resolved once at startup and injected into whichever
//! request client the front end uses.

use std::env;

/// Environment variable that overrides the backend base URL.
pub const API_URL_ENV: &str = "POSTGEN_API_URL";

/// Base URL used when no override is given.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root URL under which the backend endpoints live
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Create a configuration from the environment.
    ///
    /// Reads `POSTGEN_API_URL`, falling back to `http://localhost:5000/api`.
    pub fn new() -> Self {
        Self::from_override(env::var(API_URL_ENV).ok().as_deref())
    }

    /// Resolve a configuration from an optional override.
    ///
    /// An empty or whitespace-only override counts as unset.
    pub fn from_override(api_url: Option<&str>) -> Self {
        match api_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self {
                api_url: url.to_string(),
            },
            None => Self::default(),
        }
    }

    /// Resolve with the usual precedence: explicit flag, then environment, then default.
    pub fn resolve(explicit: Option<String>) -> Self {
        match explicit {
            Some(url) if !url.trim().is_empty() => Self::default().with_api_url(url),
            _ => Self::new(),
        }
    }

    /// Replace the base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim().to_string();
        self
    }

    /// Full URL of the generate endpoint.
    pub fn generate_url(&self) -> String {
        format!("{}/generate", self.api_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
