//! Front-end Configuration
//!
//! Values are baked in at build time (the app runs in a browser, there is
//! no process environment at runtime). Unset or malformed values fall back
//! to the defaults.

use log::warn;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3009/api";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5000;
pub const DEFAULT_AUTH_COOKIE: &str = "token";
pub const DEFAULT_LOG_CAPACITY: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosConfig {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,
    /// Quiet period before a menu search is sent
    pub search_debounce_ms: u32,
    /// How long a toast stays visible
    pub toast_duration_ms: u32,
    /// Cookie whose presence marks a logged-in session
    pub auth_cookie_key: String,
    /// Lines kept by the in-memory log buffer
    pub log_capacity: usize,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            auth_cookie_key: DEFAULT_AUTH_COOKIE.to_string(),
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl PosConfig {
    /// Configuration from `ELAINA_*` variables captured at compile time
    pub fn from_build_env() -> Self {
        Self::with_overrides(|key| match key {
            "ELAINA_API_BASE_URL" => option_env!("ELAINA_API_BASE_URL"),
            "ELAINA_SEARCH_DEBOUNCE_MS" => option_env!("ELAINA_SEARCH_DEBOUNCE_MS"),
            "ELAINA_TOAST_DURATION_MS" => option_env!("ELAINA_TOAST_DURATION_MS"),
            "ELAINA_AUTH_COOKIE" => option_env!("ELAINA_AUTH_COOKIE"),
            "ELAINA_LOG_CAPACITY" => option_env!("ELAINA_LOG_CAPACITY"),
            _ => None,
        })
    }

    /// Apply overrides from an arbitrary key lookup on top of the defaults
    pub fn with_overrides<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("ELAINA_API_BASE_URL").map(str::trim).filter(|v| !v.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(ms) = parse_number(&lookup, "ELAINA_SEARCH_DEBOUNCE_MS") {
            config.search_debounce_ms = ms;
        }
        if let Some(ms) = parse_number(&lookup, "ELAINA_TOAST_DURATION_MS") {
            config.toast_duration_ms = ms;
        }
        if let Some(key) = lookup("ELAINA_AUTH_COOKIE").map(str::trim).filter(|v| !v.is_empty()) {
            config.auth_cookie_key = key.to_string();
        }
        if let Some(capacity) = parse_number(&lookup, "ELAINA_LOG_CAPACITY") {
            config.log_capacity = usize::max(capacity, 1);
        }

        config
    }
}

fn parse_number<'a, T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<&'a str>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?.trim();
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {}={:?}: not a number", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PosConfig::with_overrides(|_| None);
        assert_eq!(config, PosConfig::default());
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.api_base_url, "http://localhost:3009/api");
    }

    #[test]
    fn test_overrides_applied() {
        let config = PosConfig::with_overrides(|key| match key {
            "ELAINA_API_BASE_URL" => Some("https://pos.example.com/api/"),
            "ELAINA_SEARCH_DEBOUNCE_MS" => Some("150"),
            "ELAINA_AUTH_COOKIE" => Some("session"),
            _ => None,
        });
        assert_eq!(config.api_base_url, "https://pos.example.com/api");
        assert_eq!(config.search_debounce_ms, 150);
        assert_eq!(config.auth_cookie_key, "session");
        assert_eq!(config.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
    }

    #[test]
    fn test_malformed_number_falls_back() {
        let config = PosConfig::with_overrides(|key| match key {
            "ELAINA_TOAST_DURATION_MS" => Some("soon"),
            _ => None,
        });
        assert_eq!(config.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
    }
}
