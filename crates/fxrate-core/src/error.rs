use std::path::PathBuf;

use thiserror::Error;

use crate::ExchangeDate;

/// Input problems detected before any rate call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date must use the YYYY-MM-DD format: '{value}'")]
    InvalidDateFormat { value: String },

    #[error("date {date} is outside the supported window {start}..={end}")]
    DateOutOfRange {
        date: ExchangeDate,
        start: ExchangeDate,
        end: ExchangeDate,
    },

    #[error("currency '{code}' is not offered by the rate service")]
    UnsupportedCurrency { code: String },
}

impl ValidationError {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDateFormat { .. } => "InvalidDateFormat",
            Self::DateOutOfRange { .. } => "DateOutOfRange",
            Self::UnsupportedCurrency { .. } => "UnsupportedCurrency",
        }
    }
}

/// Failures while resolving the set of supported currency codes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("currency catalog unavailable: {message}")]
    ServiceUnavailable { message: String },

    #[error("currency catalog payload is malformed: {message}")]
    MalformedCatalog { message: String },
}

impl CatalogError {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ServiceUnavailable { .. } => "ServiceUnavailable",
            Self::MalformedCatalog { .. } => "MalformedCatalog",
        }
    }
}

/// Failures of the single rate call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("rate service unreachable: {message}")]
    Network { message: String },

    #[error("rate service returned status {status}: {body}")]
    Service { status: u16, body: String },

    #[error("rate payload does not match the expected schema: {message}")]
    Schema { message: String },

    #[error("rate payload is not meaningful: {message}")]
    Semantic { message: String },
}

impl FetchError {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Network { .. } => "NetworkError",
            Self::Service { .. } => "ServiceError",
            Self::Schema { .. } => "SchemaError",
            Self::Semantic { .. } => "SemanticError",
        }
    }
}

/// Failures while writing an artifact to the output directory.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write artifact {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

impl PersistenceError {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::CreateDirectory { .. } => "DirectoryCreationError",
            Self::Write { .. } => "WriteError",
            Self::Encode(_) => "EncodeError",
        }
    }
}

/// Rejected configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base url cannot be empty")]
    EmptyBaseUrl,

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("validation window start {start} is after its end {end}")]
    InvertedWindow {
        start: ExchangeDate,
        end: ExchangeDate,
    },

    #[error("invalid validation window bound: {0}")]
    WindowBound(#[source] ValidationError),
}
