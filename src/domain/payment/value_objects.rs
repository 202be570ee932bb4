use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{ParseAmountError, PaymentError};

// ============================================================================
// Payment Value Objects
// ============================================================================

/// Monetary amount in minor units (two decimal places)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_minor_units(minor_units: i64) -> Self {
        Self(minor_units)
    }

    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    /// Parses `"100"`, `"100.5"` or `"100.00"`; at most two decimals
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseAmountError(s.to_string());

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || fraction.len() > 2 || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let minor = whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -minor } else { minor }))
    }
}

/// ISO 4217 style currency code, e.g. "USD"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Result<Self, PaymentError> {
        let code = code.into();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(PaymentError::InvalidCurrency(code));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Currency {
    type Error = PaymentError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

/// Lifecycle of a payment, derived from its events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Taken,
    PartiallyRefunded,
    Refunded,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_parsing() {
        assert_eq!("100.00".parse::<Amount>().unwrap(), Amount::from_minor_units(10_000));
        assert_eq!("100".parse::<Amount>().unwrap(), Amount::from_minor_units(10_000));
        assert_eq!("0.5".parse::<Amount>().unwrap(), Amount::from_minor_units(50));
        assert_eq!("12.07".parse::<Amount>().unwrap(), Amount::from_minor_units(1_207));
        assert_eq!("-3.25".parse::<Amount>().unwrap(), Amount::from_minor_units(-325));
    }

    #[test]
    fn test_amount_parsing_rejects_garbage() {
        for input in ["", ".50", "1.234", "abc", "1.x", "--1", "1e3"] {
            assert!(input.parse::<Amount>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::from_minor_units(10_000).to_string(), "100.00");
        assert_eq!(Amount::from_minor_units(5).to_string(), "0.05");
        assert_eq!(Amount::from_minor_units(-1_250).to_string(), "-12.50");
        assert_eq!(Amount::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_amount_arithmetic() {
        let a = Amount::from_minor_units(700);
        let b = Amount::from_minor_units(250);

        assert_eq!(a.checked_add(b), Some(Amount::from_minor_units(950)));
        assert_eq!(a.checked_sub(b), Some(Amount::from_minor_units(450)));
        assert_eq!(Amount::from_minor_units(i64::MAX).checked_add(b), None);
        assert!(a.is_positive());
        assert!(!Amount::ZERO.is_positive());
    }

    #[test]
    fn test_currency_validation() {
        assert_eq!(Currency::new("USD").unwrap().as_str(), "USD");
        assert!(matches!(Currency::new("usd"), Err(PaymentError::InvalidCurrency(_))));
        assert!(Currency::new("US").is_err());
        assert!(Currency::new("EURO").is_err());
        assert!(Currency::new("").is_err());
    }

    #[test]
    fn test_currency_serialization() {
        let currency = Currency::new("EUR").unwrap();

        let json = serde_json::to_string(&currency).unwrap();
        assert_eq!(json, r#""EUR""#);

        let deserialized: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(currency, deserialized);

        assert!(serde_json::from_str::<Currency>(r#""eur""#).is_err());
    }

    #[test]
    fn test_payment_status_default() {
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
    }
}
