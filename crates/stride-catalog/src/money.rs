//! Money type for catalog prices.
//!
//! Prices are carried as integers in the smallest unit of the currency
//! (cents for USD) and only turned into text at display time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Result<Self, CatalogError> {
        match code.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "CAD" => Ok(Currency::CAD),
            "AUD" => Ok(Currency::AUD),
            _ => Err(CatalogError::UnknownCurrency(code.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A price in a given currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Format as a display string (e.g., "$1,234.50").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let magnitude = self.amount_minor.unsigned_abs();
        let major = group_thousands(magnitude / divisor);
        let sign = if self.amount_minor < 0 { "-" } else { "" };

        if places == 0 {
            format!("{}{}{}", sign, self.currency.symbol(), major)
        } else {
            let minor = magnitude % divisor;
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.currency.symbol(),
                major,
                minor,
                width = places as usize
            )
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Render an amount in minor units as a currency string.
///
/// ```
/// use stride_catalog::money::{format_price, Currency};
/// assert_eq!(format_price(5000, Currency::USD), "$50.00");
/// ```
pub fn format_price(amount_minor: i64, currency: Currency) -> String {
    Money::new(amount_minor, currency).display()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_dollars() {
        assert_eq!(format_price(5000, Currency::USD), "$50.00");
        assert_eq!(format_price(13000, Currency::USD), "$130.00");
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_price(4999, Currency::USD), "$49.99");
        assert_eq!(format_price(5, Currency::USD), "$0.05");
        assert_eq!(format_price(0, Currency::USD), "$0.00");
    }

    #[test]
    fn test_format_thousands_grouping() {
        assert_eq!(format_price(123456, Currency::USD), "$1,234.56");
        assert_eq!(format_price(100000000, Currency::USD), "$1,000,000.00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_price(-250, Currency::USD), "-$2.50");
    }

    #[test]
    fn test_format_zero_decimal_currency() {
        assert_eq!(format_price(500, Currency::JPY), "\u{00a5}500");
        assert_eq!(format_price(12000, Currency::JPY), "\u{00a5}12,000");
    }

    #[test]
    fn test_money_display_matches_format_price() {
        let m = Money::new(9000, Currency::EUR);
        assert_eq!(m.to_string(), "\u{20ac}90.00");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD").unwrap(), Currency::USD);
        assert_eq!(Currency::from_code("gbp").unwrap(), Currency::GBP);
        assert!(matches!(
            Currency::from_code("XYZ"),
            Err(CatalogError::UnknownCurrency(_))
        ));
    }
}
