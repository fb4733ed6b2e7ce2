//! Client configuration

/// Default holiday API endpoint
pub const DEFAULT_BASE_URL: &str = "https://calendarific.com/api/v2";

/// Default country (ISO 3166-1 alpha-2)
pub const DEFAULT_COUNTRY: &str = "IN";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Configuration for connecting to the holiday data API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayClientConfig {
    /// API base URL (e.g., "https://calendarific.com/api/v2")
    pub base_url: String,

    /// API key, sent as the `api_key` query parameter
    pub api_key: Option<String>,

    /// Country whose holidays are requested
    pub country: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl HolidayClientConfig {
    /// Create a new configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            country: DEFAULT_COUNTRY.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the country code
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Create a holiday client from this configuration
    pub fn build_client(&self) -> super::HolidayResult<super::HolidayClient> {
        super::HolidayClient::new(self)
    }
}

impl Default for HolidayClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
