//! Client configuration.

use std::time::Duration;

/// Used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// API client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    ///
    /// `KWAL_API_BASE_URL` wins over `NEXT_PUBLIC_API_BASE_URL`; unparseable
    /// timeouts fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = std::env::var("KWAL_API_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                std::env::var("NEXT_PUBLIC_API_BASE_URL")
                    .ok()
                    .filter(|s| !s.trim().is_empty())
            })
            .unwrap_or(defaults.base_url);

        Self {
            base_url: normalize_base_url(&base_url),
            timeout: Duration::from_secs(
                std::env::var("KWAL_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.timeout.as_secs()),
            ),
            connect_timeout: Duration::from_secs(
                std::env::var("KWAL_API_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.connect_timeout.as_secs()),
            ),
        }
    }

    /// Point at another backend, e.g. a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = normalize_base_url(base_url.as_ref());
        self
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("KWAL_API_BASE_URL");
        std::env::remove_var("NEXT_PUBLIC_API_BASE_URL");
        std::env::remove_var("KWAL_API_TIMEOUT_SECS");
        std::env::remove_var("KWAL_API_CONNECT_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn test_config_default_values() {
        clear_env();
        let config = ClientConfig::from_env();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:5000");
    }

    #[test]
    #[serial]
    fn test_config_base_url_precedence() {
        clear_env();
        std::env::set_var("NEXT_PUBLIC_API_BASE_URL", "https://fallback.example.com/");
        assert_eq!(
            ClientConfig::from_env().base_url,
            "https://fallback.example.com"
        );

        std::env::set_var("KWAL_API_BASE_URL", "https://api.example.com//");
        assert_eq!(ClientConfig::from_env().base_url, "https://api.example.com");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_bad_timeout_falls_back() {
        clear_env();
        std::env::set_var("KWAL_API_TIMEOUT_SECS", "soon");
        std::env::set_var("KWAL_API_CONNECT_TIMEOUT_SECS", "2");
        let config = ClientConfig::from_env();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        clear_env();
    }
}
