//! The single remote call that turns a validated request into a rate.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::http_client::HttpClient;
use crate::service::{ServiceEndpoint, ServiceEnvelope};
use crate::{CurrencyCode, ExchangeDate, ExchangeRateRequest, ExchangeRateResponse, FetchError};

/// Raw `data` object of a rate response, before semantic checks.
#[derive(Debug, Deserialize)]
struct RatePayload {
    from: CurrencyCode,
    to: CurrencyCode,
    rate: f64,
    date: ExchangeDate,
}

/// Performs one rate call per request. There is no internal retry.
#[derive(Clone)]
pub struct RateFetcher {
    http_client: Arc<dyn HttpClient>,
    endpoint: ServiceEndpoint,
}

impl RateFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>, endpoint: ServiceEndpoint) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }

    pub async fn fetch_rate(
        &self,
        request: &ExchangeRateRequest,
    ) -> Result<ExchangeRateResponse, FetchError> {
        let http_request = self
            .endpoint
            .rate_request(&request.from, &request.to, request.date);

        let response = self
            .http_client
            .execute(http_request)
            .await
            .map_err(|error| FetchError::Network {
                message: if error.timed_out() {
                    format!(
                        "timed out calling {}: {}",
                        self.endpoint.base_url(),
                        error.message()
                    )
                } else {
                    format!(
                        "unable to reach {}: {}",
                        self.endpoint.base_url(),
                        error.message()
                    )
                },
            })?;

        if !response.is_success() {
            return Err(FetchError::Service {
                status: response.status,
                body: response.body,
            });
        }

        let envelope: ServiceEnvelope<Value> = serde_json::from_str(&response.body)
            .map_err(|e| FetchError::Schema {
                message: e.to_string(),
            })?;

        if let Some(rejection) = envelope.rejection() {
            return Err(FetchError::Service {
                status: response.status,
                body: rejection,
            });
        }

        let data = envelope.data.ok_or_else(|| FetchError::Schema {
            message: String::from("response has no 'data' object"),
        })?;
        let payload: RatePayload =
            serde_json::from_value(data).map_err(|e| FetchError::Schema {
                message: e.to_string(),
            })?;

        into_response(request, payload)
    }
}

fn into_response(
    request: &ExchangeRateRequest,
    payload: RatePayload,
) -> Result<ExchangeRateResponse, FetchError> {
    if !payload.rate.is_finite() || payload.rate <= 0.0 {
        return Err(FetchError::Semantic {
            message: format!(
                "rate {} for {}->{} must be a positive finite number",
                payload.rate, request.from, request.to
            ),
        });
    }

    if payload.from != request.from || payload.to != request.to {
        return Err(FetchError::Semantic {
            message: format!(
                "service answered {}->{} for a {}->{} request",
                payload.from, payload.to, request.from, request.to
            ),
        });
    }

    Ok(ExchangeRateResponse {
        from: payload.from,
        to: payload.to,
        rate: payload.rate,
        date: payload.date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::{HttpError, HttpResponse};
    use crate::testing::ScriptedHttpClient;

    fn request(from: &str, to: &str) -> ExchangeRateRequest {
        ExchangeRateRequest::new(
            CurrencyCode::new(from),
            CurrencyCode::new(to),
            ExchangeDate::parse("2025-01-15").expect("date"),
        )
    }

    async fn fetch(
        response: Result<HttpResponse, HttpError>,
        request: &ExchangeRateRequest,
    ) -> Result<ExchangeRateResponse, FetchError> {
        let http = Arc::new(ScriptedHttpClient::new().with_rate(response));
        let endpoint = ServiceEndpoint::new("http://localhost:8080", "EXAMPLE_API_KEY", 1_000);
        RateFetcher::new(http, endpoint).fetch_rate(request).await
    }

    #[tokio::test]
    async fn parses_rate_payload() {
        let body = r#"{"data": {"from": "USD", "to": "EUR", "rate": 1.0255, "date": "2025-01-15"}}"#;
        let response = fetch(Ok(HttpResponse::ok_json(body)), &request("USD", "EUR"))
            .await
            .expect("rate should parse");

        assert_eq!(response.from.as_str(), "USD");
        assert_eq!(response.to.as_str(), "EUR");
        assert_eq!(response.rate, 1.0255);
        assert_eq!(response.date.to_string(), "2025-01-15");
    }

    #[tokio::test]
    async fn same_currency_rate_of_one_is_accepted() {
        let body = r#"{"data": {"from": "MDL", "to": "MDL", "rate": 1.0, "date": "2025-01-15"}}"#;
        let response = fetch(Ok(HttpResponse::ok_json(body)), &request("MDL", "MDL"))
            .await
            .expect("identity rate should parse");

        assert_eq!(response.rate, 1.0);
    }

    #[tokio::test]
    async fn transport_errors_are_network_errors() {
        let err = fetch(
            Err(HttpError::timeout("request timeout: deadline elapsed")),
            &request("USD", "EUR"),
        )
        .await
        .expect_err("must fail");

        assert_eq!(err.kind(), "NetworkError");
        assert!(err.to_string().contains("timed out"));
    }

    #[tokio::test]
    async fn non_success_status_keeps_status_and_body() {
        let err = fetch(
            Ok(HttpResponse::new(500, "upstream exploded")),
            &request("USD", "EUR"),
        )
        .await
        .expect_err("must fail");

        assert_eq!(
            err,
            FetchError::Service {
                status: 500,
                body: String::from("upstream exploded")
            }
        );
    }

    #[tokio::test]
    async fn service_rejection_is_service_error() {
        let err = fetch(
            Ok(HttpResponse::ok_json(r#"{"data": null, "error": "no rate for date"}"#)),
            &request("USD", "EUR"),
        )
        .await
        .expect_err("must fail");

        assert!(matches!(err, FetchError::Service { status: 200, .. }));
    }

    #[tokio::test]
    async fn rejection_wins_over_an_unexpected_data_shape() {
        let err = fetch(
            Ok(HttpResponse::ok_json(
                r#"{"data": [], "error": "no rate for this date"}"#,
            )),
            &request("USD", "EUR"),
        )
        .await
        .expect_err("must fail");

        assert_eq!(
            err,
            FetchError::Service {
                status: 200,
                body: String::from("no rate for this date")
            }
        );
    }

    #[tokio::test]
    async fn schema_mismatches_are_schema_errors() {
        for body in [
            "not json",
            r#"{"data": null}"#,
            r#"{"data": {"from": "USD", "to": "EUR", "date": "2025-01-15"}}"#,
            r#"{"data": {"from": "USD", "to": "EUR", "rate": "1.02", "date": "2025-01-15"}}"#,
            r#"{"data": {"from": "USD", "to": "EUR", "rate": 1.02, "date": "15.01.2025"}}"#,
        ] {
            let err = fetch(Ok(HttpResponse::ok_json(body)), &request("USD", "EUR"))
                .await
                .expect_err("must fail");
            assert!(matches!(err, FetchError::Schema { .. }), "{body}");
        }
    }

    #[tokio::test]
    async fn nonsensical_rates_are_semantic_errors() {
        for body in [
            r#"{"data": {"from": "USD", "to": "EUR", "rate": 0, "date": "2025-01-15"}}"#,
            r#"{"data": {"from": "USD", "to": "EUR", "rate": -0.97, "date": "2025-01-15"}}"#,
            r#"{"data": {"from": "USD", "to": "RON", "rate": 4.7, "date": "2025-01-15"}}"#,
        ] {
            let err = fetch(Ok(HttpResponse::ok_json(body)), &request("USD", "EUR"))
                .await
                .expect_err("must fail");
            assert!(matches!(err, FetchError::Semantic { .. }), "{body}");
        }
    }
}
