use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::{date, format_description};
use time::Date;

use crate::{ConfigError, ValidationError};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar date of a rate, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExchangeDate(Date);

impl ExchangeDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDateFormat {
                value: input.to_owned(),
            })
    }

    pub fn format_iso(self) -> String {
        let (year, month, day) = (self.0.year(), u8::from(self.0.month()), self.0.day());
        format!("{year:04}-{month:02}-{day:02}")
    }
}

impl Display for ExchangeDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for ExchangeDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for ExchangeDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// Inclusive range of dates the client accepts rate requests for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: ExchangeDate,
    end: ExchangeDate,
}

impl DateWindow {
    pub fn new(start: ExchangeDate, end: ExchangeDate) -> Result<Self, ConfigError> {
        if start > end {
            return Err(ConfigError::InvertedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a window from two `YYYY-MM-DD` bounds.
    pub fn parse(start: &str, end: &str) -> Result<Self, ConfigError> {
        let start = ExchangeDate::parse(start).map_err(ConfigError::WindowBound)?;
        let end = ExchangeDate::parse(end).map_err(ConfigError::WindowBound)?;
        Self::new(start, end)
    }

    pub const fn start(self) -> ExchangeDate {
        self.start
    }

    pub const fn end(self) -> ExchangeDate {
        self.end
    }

    pub fn contains(self, date: ExchangeDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        Self {
            start: ExchangeDate(date!(2025 - 01 - 01)),
            end: ExchangeDate(date!(2025 - 09 - 15)),
        }
    }
}

impl Display for DateWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
