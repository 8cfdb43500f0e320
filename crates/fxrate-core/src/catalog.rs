//! Set of currency codes the rate service currently accepts.
//!
//! The catalog is fetched fresh on every run and only lives as long as
//! validation needs it. There is no cache and no retry: one failed attempt is
//! reported straight back to the caller.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::Value;

use crate::http_client::HttpClient;
use crate::service::{ServiceEndpoint, ServiceEnvelope};
use crate::{CatalogError, CurrencyCode};

/// Currency codes offered by the service at request time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyCatalog {
    codes: BTreeSet<CurrencyCode>,
}

impl CurrencyCatalog {
    pub fn new(codes: impl IntoIterator<Item = CurrencyCode>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.codes.iter()
    }
}

impl FromIterator<CurrencyCode> for CurrencyCatalog {
    fn from_iter<I: IntoIterator<Item = CurrencyCode>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Fetches the [`CurrencyCatalog`] from the remote service.
#[derive(Clone)]
pub struct CatalogClient {
    http_client: Arc<dyn HttpClient>,
    endpoint: ServiceEndpoint,
}

impl CatalogClient {
    pub fn new(http_client: Arc<dyn HttpClient>, endpoint: ServiceEndpoint) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }

    pub async fn fetch(&self) -> Result<CurrencyCatalog, CatalogError> {
        let request = self.endpoint.currencies_request();

        let response = self.http_client.execute(request).await.map_err(|error| {
            CatalogError::ServiceUnavailable {
                message: format!(
                    "{} ({})",
                    error.message(),
                    self.endpoint.base_url()
                ),
            }
        })?;

        if !response.is_success() {
            return Err(CatalogError::ServiceUnavailable {
                message: format!("service returned status {}", response.status),
            });
        }

        let envelope: ServiceEnvelope<Value> = serde_json::from_str(&response.body)
            .map_err(|e| CatalogError::MalformedCatalog {
                message: format!("response is not a JSON envelope: {e}"),
            })?;

        if let Some(rejection) = envelope.rejection() {
            return Err(CatalogError::ServiceUnavailable {
                message: format!("service rejected the request: {rejection}"),
            });
        }

        parse_codes(envelope.data)
    }
}

fn parse_codes(data: Option<Value>) -> Result<CurrencyCatalog, CatalogError> {
    let entries = match data {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(CatalogError::MalformedCatalog {
                message: format!("expected an array of codes, got {other}"),
            })
        }
        None => {
            return Err(CatalogError::MalformedCatalog {
                message: String::from("response has no 'data' field"),
            })
        }
    };

    entries
        .into_iter()
        .map(|entry| match entry {
            Value::String(raw) => Ok(CurrencyCode::new(raw)),
            other => Err(CatalogError::MalformedCatalog {
                message: format!("catalog entry is not a string: {other}"),
            }),
        })
        .collect()
}
