//! Preconditions checked before any rate call is made.
//!
//! Rules run in order and stop at the first failure:
//!
//! 1. the date parses as `YYYY-MM-DD` ([`ValidationError::InvalidDateFormat`]),
//! 2. the date lies inside the configured window ([`ValidationError::DateOutOfRange`]),
//! 3. both codes are in the fetched catalog ([`ValidationError::UnsupportedCurrency`]).
//!
//! Equal source and target currencies are a valid request.

use crate::{CurrencyCatalog, CurrencyCode, DateWindow, ExchangeDate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validator {
    window: DateWindow,
}

impl Validator {
    pub const fn new(window: DateWindow) -> Self {
        Self { window }
    }

    /// Rules 1 and 2. Needs no catalog, so callers run it before going to the network.
    pub fn check_date(&self, raw: &str) -> Result<ExchangeDate, ValidationError> {
        let date = ExchangeDate::parse(raw)?;
        if !self.window.contains(date) {
            return Err(ValidationError::DateOutOfRange {
                date,
                start: self.window.start(),
                end: self.window.end(),
            });
        }
        Ok(date)
    }

    /// Rule 3.
    pub fn check_currencies(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        catalog: &CurrencyCatalog,
    ) -> Result<(), ValidationError> {
        for code in [from, to] {
            if !catalog.contains(code) {
                return Err(ValidationError::UnsupportedCurrency {
                    code: code.to_string(),
                });
            }
        }
        Ok(())
    }

    /// All rules against raw input, returning the parsed values on success.
    pub fn validate(
        &self,
        from: &str,
        to: &str,
        date: &str,
        catalog: &CurrencyCatalog,
    ) -> Result<(CurrencyCode, CurrencyCode, ExchangeDate), ValidationError> {
        let date = self.check_date(date)?;
        let from = CurrencyCode::new(from);
        let to = CurrencyCode::new(to);
        self.check_currencies(&from, &to, catalog)?;
        Ok((from, to, date))
    }
}
