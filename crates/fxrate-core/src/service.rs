//! Request builders and response envelope for the remote rate service.
//!
//! Both endpoints are `POST`s against the service root carrying the API key as
//! a `key` form field:
//!
//! | Call | Query | `data` payload |
//! |------|-------|----------------|
//! | catalog | `?currencies` | `["USD", "EUR", ...]` |
//! | rate | `?from=F&to=T&date=YYYY-MM-DD` | `{"from", "to", "rate", "date"}` |
//!
//! Every response is wrapped as `{"data": ..., "error": ...}`; a truthy
//! `error` means the service rejected the call even when the status is 2xx.

use serde::Deserialize;
use serde_json::Value;

use crate::http_client::HttpRequest;
use crate::{ClientConfig, CurrencyCode, ExchangeDate};

/// Location and credentials of the rate service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    base_url: String,
    api_key: String,
    timeout_ms: u64,
}

impl ServiceEndpoint {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout_ms: u64) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            api_key: api_key.into(),
            timeout_ms,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url, &config.api_key, config.timeout_ms)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn currencies_request(&self) -> HttpRequest {
        self.keyed_post(format!("{}/?currencies", self.base_url))
    }

    pub fn rate_request(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        date: ExchangeDate,
    ) -> HttpRequest {
        let url = format!(
            "{}/?from={}&to={}&date={}",
            self.base_url,
            urlencoding::encode(from.as_str()),
            urlencoding::encode(to.as_str()),
            date
        );
        self.keyed_post(url)
    }

    fn keyed_post(&self, url: String) -> HttpRequest {
        HttpRequest::post_form(url, &[("key", self.api_key.as_str())], self.timeout_ms)
    }
}

/// `{"data": ..., "error": ...}` wrapper shared by both endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceEnvelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    error: Value,
}

impl<T> ServiceEnvelope<T> {
    /// The service-side rejection message, if the `error` field is truthy.
    pub fn rejection(&self) -> Option<String> {
        match &self.error {
            Value::Null | Value::Bool(false) => None,
            Value::String(message) if message.is_empty() => None,
            Value::String(message) => Some(message.clone()),
            other => Some(other.to_string()),
        }
    }
}
