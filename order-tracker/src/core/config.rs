use holiday_client::HolidayClientConfig;
use holiday_client::config::{DEFAULT_BASE_URL, DEFAULT_COUNTRY, DEFAULT_TIMEOUT_MS};

/// Tracker configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ORDERS_FILE | orders.json | Order list (JSON array) |
/// | HOLIDAY_API_URL | https://calendarific.com/api/v2 | Holiday API base URL |
/// | HOLIDAY_API_KEY | (unset) | Holiday API key |
/// | HOLIDAY_COUNTRY | IN | Country whose holidays apply |
/// | HOLIDAY_TIMEOUT_MS | 5000 | Holiday request timeout (ms) |
/// | LOG_LEVEL | info | Log level |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | (unset) | Daily rolling log directory |
///
/// # Example
///
/// ```ignore
/// ORDERS_FILE=/data/orders.json HOLIDAY_API_KEY=xxx cargo run -- 2024-01-29
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted order list
    pub orders_file: String,
    /// Holiday API base URL
    pub holiday_api_url: String,
    /// Holiday API key
    pub holiday_api_key: Option<String>,
    /// Holiday country code
    pub holiday_country: String,
    /// Holiday request timeout (milliseconds)
    pub holiday_timeout_ms: u64,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Emit JSON log lines instead of plain text
    pub log_json: bool,
    /// Log directory; stdout when unset
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults
    pub fn from_env() -> Self {
        Self {
            orders_file: std::env::var("ORDERS_FILE").unwrap_or_else(|_| "orders.json".into()),
            holiday_api_url: std::env::var("HOLIDAY_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            holiday_api_key: std::env::var("HOLIDAY_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            holiday_country: std::env::var("HOLIDAY_COUNTRY")
                .unwrap_or_else(|_| DEFAULT_COUNTRY.into()),
            holiday_timeout_ms: std::env::var("HOLIDAY_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Holiday client settings derived from this configuration
    pub fn holiday_client_config(&self) -> HolidayClientConfig {
        let config = HolidayClientConfig::new(&self.holiday_api_url)
            .with_country(&self.holiday_country)
            .with_timeout_ms(self.holiday_timeout_ms);
        match &self.holiday_api_key {
            Some(key) => config.with_api_key(key),
            None => config,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holiday_client_config() {
        let config = Config {
            orders_file: "orders.json".into(),
            holiday_api_url: "http://localhost:9000".into(),
            holiday_api_key: Some("key".into()),
            holiday_country: "IN".into(),
            holiday_timeout_ms: 1500,
            log_level: "debug".into(),
            log_json: false,
            log_dir: None,
        };

        let client_config = config.holiday_client_config();
        assert_eq!(client_config.base_url, "http://localhost:9000");
        assert_eq!(client_config.api_key.as_deref(), Some("key"));
        assert_eq!(client_config.country, "IN");
        assert_eq!(client_config.timeout_ms, 1500);
    }

    #[test]
    fn test_holiday_client_config_without_key() {
        let config = Config {
            holiday_api_key: None,
            ..Config::from_env()
        };
        assert!(config.holiday_client_config().api_key.is_none());
    }
}
