//! HTTP client for the holiday data API

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::types::HolidayPayload;
use crate::{HolidayClientConfig, HolidayError, HolidayResult, HolidaySet};

/// HTTP client for fetching national holidays
#[derive(Debug, Clone)]
pub struct HolidayClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    country: String,
}

impl HolidayClient {
    /// Create a new holiday client from configuration
    ///
    /// Every request is bounded by `config.timeout_ms`.
    pub fn new(config: &HolidayClientConfig) -> HolidayResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            country: config.country.clone(),
        })
    }

    /// Fetch national holidays for `year`, failing on any transport or payload problem
    pub async fn fetch_national(&self, year: i32) -> HolidayResult<HolidaySet> {
        let url = format!("{}/holidays", self.base_url.trim_end_matches('/'));
        let mut query = vec![("country", self.country.clone()), ("year", year.to_string())];
        if let Some(key) = &self.api_key {
            query.push(("api_key", key.clone()));
        }

        let response = self.client.get(&url).query(&query).send().await?;
        let payload: HolidayPayload = Self::handle_response(response).await?;
        Ok(payload.national_holidays(year))
    }

    /// National holidays for `year`, or the fixed fallback set if the API is unusable
    pub async fn get_holidays(&self, year: i32) -> HolidaySet {
        match self.fetch_national(year).await {
            Ok(holidays) => {
                tracing::debug!(year, count = holidays.len(), "Loaded national holidays");
                holidays
            }
            Err(e) => {
                tracing::warn!(year, error = %e, "Holiday fetch failed, using fallback holidays");
                HolidaySet::fallback(year)
            }
        }
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> HolidayResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(HolidayError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        if text.trim().is_empty() {
            return Err(HolidayError::InvalidResponse("Empty body".to_string()));
        }

        serde_json::from_str(&text).map_err(Into::into)
    }
}
