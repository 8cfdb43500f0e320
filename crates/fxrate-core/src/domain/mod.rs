//! # Domain Models
//!
//! Typed values passed between the catalog, validator, fetcher and persister.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CurrencyCode`] | Normalized uppercase currency token |
//! | [`ExchangeDate`] | `YYYY-MM-DD` calendar date |
//! | [`DateWindow`] | Inclusive range of accepted dates |
//! | [`UtcDateTime`] | RFC3339 UTC timestamp |
//! | [`ExchangeRateRequest`] | Pair, date and issue time of one call |
//! | [`ExchangeRateResponse`] | Rate returned by the service |
//! | [`PersistedRecord`] | Request/response pair written to disk |
//!
//! Dates are checked for shape at construction; membership in the service catalog and
//! the date window are checked by the [`Validator`](crate::Validator).

mod currency;
mod date;
mod models;
mod timestamp;

pub use currency::CurrencyCode;
pub use date::{DateWindow, ExchangeDate};
pub use models::{ExchangeRateRequest, ExchangeRateResponse, PersistedRecord};
pub use timestamp::UtcDateTime;
