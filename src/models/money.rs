//! Money type for representing currency amounts
//!
//! Internally stores amounts as integer minor units (i64) to avoid
//! floating-point precision issues. The tracked currency has no decimal
//! subdivision in display (whole yen), so one unit is one display unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as integer minor units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use mealledger::models::Money;
    /// let amount = Money::from_units(1200); // ¥1200
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Divide evenly across `parts`, flooring toward negative infinity
    ///
    /// Flooring (rather than truncating) matters when the amount is
    /// negative: an overspent remainder must divide to an allowance that
    /// never rounds up past the true remainder.
    pub fn divide_floor(&self, parts: i64) -> Self {
        Self(self.0.div_euclid(parts))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts a whole number of units, optionally prefixed with a
    /// currency symbol: "1200", "-300", "¥1200", "$1200".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('¥').or_else(|| s.strip_prefix('$')).unwrap_or(s);

        let units: i64 = s
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -units } else { units }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, self.0.abs())
        } else {
            format!("{}{}", symbol, self.0)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let m = Money::from_units(1200);
        assert_eq!(m.units(), 1200);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(1200)), "1200");
        assert_eq!(format!("{}", Money::from_units(0)), "0");
        assert_eq!(format!("{}", Money::from_units(-300)), "-300");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_units(1200).format_with_symbol("¥"), "¥1200");
        assert_eq!(Money::from_units(-300).format_with_symbol("¥"), "-¥300");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1000);
        let b = Money::from_units(500);

        assert_eq!((a + b).units(), 1500);
        assert_eq!((a - b).units(), 500);
        assert_eq!((-a).units(), -1000);
    }

    #[test]
    fn test_divide_floor() {
        assert_eq!(Money::from_units(1000).divide_floor(3).units(), 333);
        assert_eq!(Money::from_units(999).divide_floor(3).units(), 333);
        // Floor toward negative infinity, not toward zero
        assert_eq!(Money::from_units(-100).divide_floor(3).units(), -34);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("1200").unwrap().units(), 1200);
        assert_eq!(Money::parse("¥1200").unwrap().units(), 1200);
        assert_eq!(Money::parse("$1200").unwrap().units(), 1200);
        assert_eq!(Money::parse("-300").unwrap().units(), -300);
        assert!(Money::parse("12.50").is_err());
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_units(100),
            Money::from_units(200),
            Money::from_units(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.units(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_units(1200);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1200");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
