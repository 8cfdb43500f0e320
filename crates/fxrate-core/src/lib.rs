//! # fxrate Core
//!
//! Validation, retrieval and persistence of currency exchange rates.
//!
//! ## Overview
//!
//! Given a source currency, a target currency and a date, a run:
//!
//! 1. checks the date format and the configured date window,
//! 2. fetches the catalog of currencies the rate service offers,
//! 3. checks both codes against that catalog,
//! 4. calls the rate endpoint once,
//! 5. writes the request and response to `{FROM}_{TO}_{DATE}.json`.
//!
//! Every stage reports to a [`DiagnosticsSink`]. Nothing is retried and nothing
//! is written unless every stage succeeds.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Currency catalog and the client that fetches it |
//! | [`config`] | Client configuration and defaults |
//! | [`diagnostics`] | Diagnostics sink and console/file subscriber |
//! | [`domain`] | Currency codes, dates, requests, responses, records |
//! | [`error`] | Error taxonomy per stage |
//! | [`fetcher`] | The rate call |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`persist`] | Atomic artifact writer |
//! | [`pipeline`] | Orchestration and exit statuses |
//! | [`service`] | Remote service request builders and envelope |
//! | [`validator`] | Date-window and catalog-membership checks |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fxrate_core::{ClientConfig, ExchangeRatePipeline, ReqwestHttpClient, TracingSink};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default();
//!     let pipeline = ExchangeRatePipeline::from_config(
//!         &config,
//!         Arc::new(ReqwestHttpClient::new()),
//!         Arc::new(TracingSink::new()),
//!     );
//!
//!     let report = pipeline.run("USD", "EUR", "2025-01-15").await?;
//!     println!("stored {}", report.location.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Each stage has its own error enum; [`RunError`] wraps them and maps each
//! category to a distinct process exit status:
//!
//! ```rust
//! use fxrate_core::{RunError, ValidationError};
//!
//! let error = RunError::from(ValidationError::UnsupportedCurrency {
//!     code: String::from("XXX"),
//! });
//! assert_eq!(error.exit_code(), 2);
//! ```

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod persist;
pub mod pipeline;
pub mod service;
pub mod validator;

#[cfg(test)]
mod testing;

pub use catalog::{CatalogClient, CurrencyCatalog};

pub use config::ClientConfig;

pub use diagnostics::{
    DiagnosticEntry, DiagnosticsError, DiagnosticsSink, Level, MemorySink, TracingSink,
};

pub use domain::{
    CurrencyCode, DateWindow, ExchangeDate, ExchangeRateRequest, ExchangeRateResponse,
    PersistedRecord, UtcDateTime,
};

pub use error::{CatalogError, ConfigError, FetchError, PersistenceError, ValidationError};

pub use fetcher::RateFetcher;

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use persist::RecordPersister;

pub use pipeline::{exit_code, ExchangeRatePipeline, RunError, RunReport};

pub use service::ServiceEndpoint;

pub use validator::Validator;
