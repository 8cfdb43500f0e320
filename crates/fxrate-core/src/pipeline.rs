//! One exchange-rate run: validate, fetch the catalog, fetch the rate, persist.
//!
//! Stages talk through plain values ([`ExchangeRateRequest`],
//! [`ExchangeRateResponse`], [`PersistedRecord`]) rather than shared state.
//! A record is written only when every earlier stage succeeded; any failure
//! is reported to the diagnostics sink with the pair, date and cause and
//! returned as a [`RunError`] carrying its exit status.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::diagnostics::{DiagnosticsSink, Level};
use crate::http_client::HttpClient;
use crate::service::ServiceEndpoint;
use crate::{
    CatalogClient, CatalogError, ClientConfig, CurrencyCode, ExchangeRateRequest, FetchError,
    PersistedRecord, PersistenceError, RateFetcher, RecordPersister, ValidationError, Validator,
};

/// Process exit statuses, one per failure category.
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    pub const CONFIG: u8 = 1;
    pub const VALIDATION: u8 = 2;
    pub const CATALOG: u8 = 3;
    pub const FETCH: u8 = 4;
    pub const PERSISTENCE: u8 = 5;
}

/// Failure of a run, tagged by the stage that produced it.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl RunError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => exit_code::VALIDATION,
            Self::Catalog(_) => exit_code::CATALOG,
            Self::Fetch(_) => exit_code::FETCH,
            Self::Persistence(_) => exit_code::PERSISTENCE,
        }
    }

    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Catalog(_) => "catalog",
            Self::Fetch(_) => "rate fetch",
            Self::Persistence(_) => "persistence",
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(error) => error.kind(),
            Self::Catalog(error) => error.kind(),
            Self::Fetch(error) => error.kind(),
            Self::Persistence(error) => error.kind(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub record: PersistedRecord,
    pub location: PathBuf,
    pub catalog_size: usize,
}

pub struct ExchangeRatePipeline {
    validator: Validator,
    catalog: CatalogClient,
    fetcher: RateFetcher,
    persister: RecordPersister,
    sink: Arc<dyn DiagnosticsSink>,
}

impl ExchangeRatePipeline {
    pub fn new(
        validator: Validator,
        catalog: CatalogClient,
        fetcher: RateFetcher,
        persister: RecordPersister,
        sink: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            validator,
            catalog,
            fetcher,
            persister,
            sink,
        }
    }

    /// Wire every stage against one transport and one configuration.
    pub fn from_config(
        config: &ClientConfig,
        http_client: Arc<dyn HttpClient>,
        sink: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        let endpoint = ServiceEndpoint::from_config(config);
        Self::new(
            Validator::new(config.window),
            CatalogClient::new(http_client.clone(), endpoint.clone()),
            RateFetcher::new(http_client, endpoint),
            RecordPersister::new(&config.output_dir),
            sink,
        )
    }

    pub async fn run(&self, from: &str, to: &str, date: &str) -> Result<RunReport, RunError> {
        let label = format!(
            "{}->{} on {}",
            from.trim().to_ascii_uppercase(),
            to.trim().to_ascii_uppercase(),
            date.trim()
        );

        let result = self.execute(from, to, date, &label).await;
        if let Err(error) = &result {
            self.sink.record(
                Level::Error,
                &format!(
                    "{} failed for {label} ({}): {error}",
                    error.stage(),
                    error.kind()
                ),
            );
        }
        result
    }

    async fn execute(
        &self,
        from: &str,
        to: &str,
        date: &str,
        label: &str,
    ) -> Result<RunReport, RunError> {
        let date = self.validator.check_date(date)?;
        let from = CurrencyCode::new(from);
        let to = CurrencyCode::new(to);

        self.sink.record(Level::Info, "fetching available currencies");
        let catalog = self.catalog.fetch().await?;
        self.sink.record(
            Level::Info,
            &format!(
                "available currencies ({}): {}",
                catalog.len(),
                catalog
                    .iter()
                    .map(CurrencyCode::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        );

        self.validator.check_currencies(&from, &to, &catalog)?;
        self.sink
            .record(Level::Info, &format!("validation passed for {label}"));

        let request = ExchangeRateRequest::new(from, to, date);
        let response = self.fetcher.fetch_rate(&request).await?;
        self.sink.record(
            Level::Info,
            &format!("fetched rate {} for {label}", response.rate),
        );

        let record = PersistedRecord::new(request, response);
        let location = self.persister.persist(&record)?;
        self.sink.record(
            Level::Info,
            &format!("data saved to {}", location.display()),
        );

        Ok(RunReport {
            record,
            location,
            catalog_size: catalog.len(),
        })
    }
}
