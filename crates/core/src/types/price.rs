//! Type-safe price representation.
//!
//! Catalog data stores prices as thousands-separated strings (a legacy
//! format, e.g. `"1,320"`). Internally prices are whole-unit integer
//! amounts; this module is the parse/format adapter used at the I/O edge.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty (or all separators).
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a number after stripping separators.
    #[error("malformed price string: {0:?}")]
    Malformed(String),
}

/// A whole-unit price amount.
///
/// Parsed from the legacy thousands-separated string format and formatted
/// back to it for display, so `"1,320"` round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a price from a whole-unit amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Parse a price from its stored string form, stripping thousands
    /// separators (e.g. `"1,320"` parses to `1320`).
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Malformed`] if the string is not an integer
    /// after separators are removed.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let stripped: String = s.chars().filter(|c| *c != ',').collect();
        if stripped.is_empty() {
            return Err(PriceError::Empty);
        }
        stripped
            .parse::<i64>()
            .map(Self)
            .map_err(|_| PriceError::Malformed(s.to_owned()))
    }

    /// Get the whole-unit amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Sum of two prices.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }
}

impl fmt::Display for Price {
    /// Formats with thousands separators, matching the stored form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negative = self.0 < 0;
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (i + 3 - offset) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        if negative {
            write!(f, "-{out}")
        } else {
            write!(f, "{out}")
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_separator() {
        assert_eq!(Price::parse("1,320").unwrap(), Price::new(1320));
        assert_eq!(Price::parse("1,016").unwrap(), Price::new(1016));
        assert_eq!(Price::parse("1,234,567").unwrap(), Price::new(1_234_567));
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(Price::parse("640").unwrap(), Price::new(640));
        assert_eq!(Price::parse("0").unwrap(), Price::new(0));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            Price::parse("12.50"),
            Err(PriceError::Malformed(_))
        ));
        assert!(matches!(
            Price::parse("free"),
            Err(PriceError::Malformed(_))
        ));
        assert!(matches!(Price::parse(""), Err(PriceError::Empty)));
        assert!(matches!(Price::parse(","), Err(PriceError::Empty)));
    }

    #[test]
    fn test_display_roundtrip() {
        for s in ["1,320", "1,016", "640", "12", "1,234,567", "0"] {
            assert_eq!(Price::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Price::new(1000).to_string(), "1,000");
        assert_eq!(Price::new(999).to_string(), "999");
        assert_eq!(Price::new(1_000_000).to_string(), "1,000,000");
        assert_eq!(Price::new(-1320).to_string(), "-1,320");
    }

    #[test]
    fn test_checked_add() {
        let total = Price::parse("1,016")
            .unwrap()
            .checked_add(Price::parse("1,320").unwrap())
            .unwrap();
        assert_eq!(total.amount(), 2336);
        assert!(Price::new(i64::MAX).checked_add(Price::new(1)).is_none());
    }
}
