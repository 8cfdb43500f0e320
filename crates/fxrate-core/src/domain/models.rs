use serde::{Deserialize, Serialize};

use crate::{CurrencyCode, ExchangeDate, UtcDateTime};

/// A validated rate request, stamped when it is built right before the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRateRequest {
    #[serde(rename = "from_currency")]
    pub from: CurrencyCode,
    #[serde(rename = "to_currency")]
    pub to: CurrencyCode,
    pub date: ExchangeDate,
    #[serde(rename = "timestamp")]
    pub issued_at: UtcDateTime,
}

impl ExchangeRateRequest {
    pub fn new(from: CurrencyCode, to: CurrencyCode, date: ExchangeDate) -> Self {
        Self {
            from,
            to,
            date,
            issued_at: UtcDateTime::now(),
        }
    }
}

/// Rate returned by the service for one request.
///
/// Only [`RateFetcher`](crate::RateFetcher) builds these from a remote payload,
/// after checking the rate is positive and finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateResponse {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: f64,
    pub date: ExchangeDate,
}

/// The unit written to disk: one request and the response it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub request: ExchangeRateRequest,
    pub response: ExchangeRateResponse,
}

impl PersistedRecord {
    pub fn new(request: ExchangeRateRequest, response: ExchangeRateResponse) -> Self {
        Self { request, response }
    }

    /// Deterministic file name keyed by the requested pair and date.
    pub fn artifact_name(&self) -> String {
        format!(
            "{}_{}_{}.json",
            self.request.from, self.request.to, self.request.date
        )
    }
}
