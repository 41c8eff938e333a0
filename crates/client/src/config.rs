//! Client configuration, read from `EKOS_*` environment variables

use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_TENANT_ID: &str = "default";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MOCK_LATENCY_MS: u64 = 0;

fn env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|value| {
            let value = value.trim().to_ascii_lowercase();
            matches!(value.as_str(), "1" | "true" | "yes" | "on")
        })
        .unwrap_or(false)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend base URL, without trailing slash
    pub base_url: String,
    /// Answer every call from canned data without touching the network
    pub mock_mode: bool,
    /// Artificial delay before mock answers
    pub mock_latency: Duration,
    pub timeout: Duration,
    /// Tenant sent with searches that do not name one
    pub tenant_id: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            mock_mode: false,
            mock_latency: Duration::from_millis(DEFAULT_MOCK_LATENCY_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            tenant_id: DEFAULT_TENANT_ID.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Defaults overridden by `EKOS_API_URL`, `EKOS_MOCK_MODE`,
    /// `EKOS_MOCK_LATENCY_MS`, `EKOS_TIMEOUT_SECS` and `EKOS_TENANT_ID`
    pub fn from_env() -> Self {
        Self {
            base_url: normalize(&env_or_default("EKOS_API_URL", DEFAULT_API_URL)),
            mock_mode: env_flag("EKOS_MOCK_MODE"),
            mock_latency: Duration::from_millis(env_u64(
                "EKOS_MOCK_LATENCY_MS",
                DEFAULT_MOCK_LATENCY_MS,
            )),
            timeout: Duration::from_secs(env_u64("EKOS_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
            tenant_id: env_or_default("EKOS_TENANT_ID", DEFAULT_TENANT_ID),
        }
    }

    /// Builder: set backend URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize(&base_url.into());
        self
    }

    /// Builder: toggle mock mode
    pub fn with_mock_mode(mut self, mock_mode: bool) -> Self {
        self.mock_mode = mock_mode;
        self
    }

    /// Builder: set mock latency
    pub fn with_mock_latency(mut self, latency: Duration) -> Self {
        self.mock_latency = latency;
        self
    }

    /// Builder: set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(!config.mock_mode);
        assert_eq!(config.mock_latency, Duration::ZERO);
        assert_eq!(config.tenant_id, "default");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://backend:9000/ ");
        assert_eq!(config.base_url, "http://backend:9000");
    }

    #[test]
    fn test_builders() {
        let config = ApiConfig::default()
            .with_mock_mode(true)
            .with_mock_latency(Duration::from_millis(800))
            .with_timeout(Duration::from_secs(5));
        assert!(config.mock_mode);
        assert_eq!(config.mock_latency, Duration::from_millis(800));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
