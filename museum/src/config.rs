//! Collection client configuration parsed from environment variables.

use super::types::MuseumError;

pub const DEFAULT_MUSEUM_BASE_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuseumConfig {
    /// API root without a trailing slash.
    pub base_url: String,
    pub timeouts: Timeouts,
    /// Detail requests per `fetch_random` before giving up.
    pub max_attempts: u32,
}

impl Default for MuseumConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MUSEUM_BASE_URL.to_string(),
            timeouts: Timeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl MuseumConfig {
    /// Build typed config from environment variables.
    ///
    /// All optional:
    /// - `MUSEUM_API_BASE_URL`: default Met collection API
    /// - `MUSEUM_REQUEST_TIMEOUT_SECS`: default 15
    /// - `MUSEUM_CONNECT_TIMEOUT_SECS`: default 5
    /// - `MUSEUM_MAX_ATTEMPTS`: default 10, at least 1
    ///
    /// # Errors
    ///
    /// Returns [`MuseumError::ConfigParse`] if the base URL is not http(s).
    pub fn from_env() -> Result<Self, MuseumError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`MuseumConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`MuseumError::ConfigParse`] if the base URL is not http(s).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MuseumError> {
        let base_url = lookup("MUSEUM_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_MUSEUM_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(MuseumError::ConfigParse(format!(
                "MUSEUM_API_BASE_URL must be an http(s) URL, got '{base_url}'"
            )));
        }

        let timeouts = Timeouts {
            request_secs: parse_or(&lookup, "MUSEUM_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_or(&lookup, "MUSEUM_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let max_attempts = parse_or(&lookup, "MUSEUM_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS).max(1);

        Ok(Self { base_url, timeouts, max_attempts })
    }
}

fn parse_or<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
