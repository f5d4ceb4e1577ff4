// src/domain/money.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// A dollar amount held as whole cents so sums stay exact.
///
/// On the wire it is a plain decimal number (`2450.0`), matching what the
/// hosted backend stores for `claimAmount`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    /// Largest amount a form may enter: one trillion dollars.
    pub const MAX_INPUT: Cents = Cents(1_000_000_000_000 * 100);

    pub fn from_dollars(dollars: i64) -> Self {
        Cents(dollars.saturating_mul(100))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn from_f64(value: f64) -> Self {
        Cents((value * 100.0).round() as i64)
    }

    /// Parses user input such as `2450`, `2,450.5` or `$1,250.00`.
    /// More than two fractional digits is rejected rather than rounded, and
    /// so is anything above [`Cents::MAX_INPUT`].
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .trim()
            .trim_start_matches('$')
            .chars()
            .filter(|c| *c != ',')
            .collect();
        if cleaned.is_empty() {
            return None;
        }

        let (whole, frac) = match cleaned.split_once('.') {
            Some((w, f)) => (w, f),
            None => (cleaned.as_str(), ""),
        };
        if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().ok()? * 10,
            _ => frac.parse().ok()?,
        };
        let cents = whole.checked_mul(100)?.checked_add(frac_cents)?;
        (cents <= Self::MAX_INPUT.0).then_some(Cents(cents))
    }

    pub fn dollars(self) -> i64 {
        self.0 / 100
    }

    pub fn cents_part(self) -> i64 {
        (self.0 % 100).abs()
    }
}

impl Add for Cents {
    type Output = Cents;
    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Cents {
    type Output = Cents;
    fn sub(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.dollars(), self.cents_part())
    }
}

impl Serialize for Cents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Cents {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Cents::from_f64(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_inputs() {
        assert_eq!(Cents::parse("2450"), Some(Cents(245_000)));
        assert_eq!(Cents::parse("2,450.5"), Some(Cents(245_050)));
        assert_eq!(Cents::parse("$1,250.00"), Some(Cents(125_000)));
        assert_eq!(Cents::parse(".75"), Some(Cents(75)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Cents::parse(""), None);
        assert_eq!(Cents::parse("abc"), None);
        assert_eq!(Cents::parse("-5"), None);
        assert_eq!(Cents::parse("1.234"), None);
        assert_eq!(Cents::parse("."), None);
    }

    #[test]
    fn rejects_amounts_above_the_ceiling() {
        assert_eq!(Cents::parse("1000000000000"), Some(Cents::MAX_INPUT));
        assert_eq!(Cents::parse("1000000000000.01"), None);
        assert_eq!(Cents::parse("90000000000000000"), None);
    }

    #[test]
    fn arithmetic_saturates() {
        let big = Cents(i64::MAX - 10);
        assert_eq!(big + Cents(100), Cents(i64::MAX));
        assert_eq!(Cents(i64::MIN + 1) - Cents(100), Cents(i64::MIN));
        assert_eq!([big, big].into_iter().sum::<Cents>(), Cents(i64::MAX));
        assert_eq!(Cents::from_dollars(i64::MAX), Cents(i64::MAX));
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Cents(1_443_000).to_string(), "14430.00");
        assert_eq!(Cents(5).to_string(), "0.05");
    }

    #[test]
    fn wire_format_is_a_decimal_number() {
        let json = serde_json::to_string(&Cents(189_000)).unwrap();
        assert_eq!(json, "1890.0");
        let back: Cents = serde_json::from_str("1890.1").unwrap();
        assert_eq!(back, Cents(189_010));
    }
}
