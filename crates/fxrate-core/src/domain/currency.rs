use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Normalized currency code such as `USD` or `MDL`.
///
/// Construction only trims and uppercases. Whether the rate service actually
/// offers the currency is decided against a fetched
/// [`CurrencyCatalog`](crate::CurrencyCatalog).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(input: impl AsRef<str>) -> Self {
        Self(input.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CurrencyCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}
