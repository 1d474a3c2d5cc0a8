//! Shipping destination country codes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ISO 3166-1 alpha-2 codes for the countries the shop ships to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    /// Germany
    DE,
    /// Austria
    AT,
    /// Netherlands
    NL,
    /// Belgium
    BE,
    /// France
    FR,
    /// Switzerland
    CH,
    /// United Kingdom
    GB,
    /// Türkiye
    TR,
}

/// Error returned when a country string is not a supported destination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported shipping country: {0}")]
pub struct CountryCodeError(pub String);

impl std::str::FromStr for CountryCode {
    type Err = CountryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DE" => Ok(Self::DE),
            "AT" => Ok(Self::AT),
            "NL" => Ok(Self::NL),
            "BE" => Ok(Self::BE),
            "FR" => Ok(Self::FR),
            "CH" => Ok(Self::CH),
            "GB" => Ok(Self::GB),
            "TR" => Ok(Self::TR),
            _ => Err(CountryCodeError(s.to_string())),
        }
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
