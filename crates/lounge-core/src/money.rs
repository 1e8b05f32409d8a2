//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, and
//! `Metered` for time-based charges that must keep full precision until
//! they are displayed.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Menu prices, rates and totals are whole cents (i64)                 │
//! │                                                                         │
//! │  THE HOURLY PROBLEM                                                     │
//! │    1 minute at 1.00/hour = 1.6666... cents                              │
//! │                                                                         │
//! │  OUR SOLUTION: Metered amounts in 1/60 cent                             │
//! │    minutes × cents-per-hour is exact; round once at the boundary       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lounge_core::money::{Metered, Money};
//!
//! let cola = Money::from_cents(250); // 2.50
//! let two_colas = cola * 2;           // 5.00
//! assert_eq!(two_colas.to_string(), "5.00");
//!
//! // 150 minutes at 1.00/hour
//! let played = Metered::from_rate_minutes(Money::from_cents(100), 150);
//! assert_eq!(played.to_money().cents(), 250);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::MINUTES_PER_HOUR;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (qəpik for AZN).
///
/// ## Design Decisions
/// - **i64 (signed)**: Keeps subtraction total even though bills never go negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No currency**: The lounge bills in one local currency; the symbol
///   is added by the presentation boundary
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  MenuItem.unit_price ──► × quantity ──► Menu.total ─────┐              │
/// │                                                         ▼              │
/// │  HourlyRate ──► Metered (per minute) ──► game charge ──► Bill.total    │
/// │                                                                         │
/// │  Displayed as "11.75 ₼" only at the command boundary                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use lounge_core::money::Money;
    ///
    /// let price = Money::from_cents(250); // Represents 2.50
    /// assert_eq!(price.cents(), 250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal string such as `"2.5"` or `"8"` into Money.
    ///
    /// At most two fraction digits are accepted; no floats are involved.
    ///
    /// ## Example
    /// ```rust
    /// use lounge_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("2.5").unwrap().cents(), 250);
    /// assert_eq!(Money::parse_decimal(" 8 ").unwrap().cents(), 800);
    /// assert!(Money::parse_decimal("1.234").is_err());
    /// assert!(Money::parse_decimal("abc").is_err());
    /// ```
    pub fn parse_decimal(input: &str) -> Result<Money, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (major_str, minor_str) = match digits.split_once('.') {
            Some((major, minor)) => {
                if minor.is_empty() {
                    return Err(invalid("expected digits after the decimal point"));
                }
                (major, minor)
            }
            None => (digits, ""),
        };

        if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal point"));
        }
        if minor_str.len() > 2 || !minor_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("at most two decimal places are allowed"));
        }

        let too_large = || ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: i64::MIN / 100,
            max: i64::MAX / 100,
        };

        let major: i64 = major_str.parse().map_err(|_| too_large())?;
        let minor: i64 = match minor_str.len() {
            0 => 0,
            1 => minor_str.parse::<i64>().map_err(|_| too_large())? * 10,
            _ => minor_str.parse().map_err(|_| too_large())?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(too_large)?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use lounge_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(250); // Cola 2.50
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 500);
    /// ```
    ///
    /// Saturates at the `i64` bounds rather than overflowing.
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money with exactly two decimals and no currency symbol ("12.34").
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_decimal(s)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by a quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Metered Amount
// =============================================================================

/// A time-based amount kept at full precision.
///
/// The unit is 1/60 of a cent, so `minutes × cents-per-hour` is exact and
/// no rounding happens until [`Metered::to_money`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Metered(i128);

impl Metered {
    #[inline]
    pub const fn zero() -> Self {
        Metered(0)
    }

    /// Charge for `minutes` at `rate_per_hour`, billed proportionally.
    #[inline]
    pub const fn from_rate_minutes(rate_per_hour: Money, minutes: u32) -> Self {
        Metered(rate_per_hour.cents() as i128 * minutes as i128)
    }

    /// Lifts a whole-cent amount into the metered domain.
    #[inline]
    pub const fn from_money(money: Money) -> Self {
        Metered(money.cents() as i128 * MINUTES_PER_HOUR as i128)
    }

    /// Rounds to whole cents, half away from zero.
    ///
    /// Amounts beyond the `Money` range saturate instead of wrapping.
    ///
    /// ## Example
    /// ```rust
    /// use lounge_core::money::{Metered, Money};
    ///
    /// // 1 minute at 1.50/hour = 2.5 cents → 3 cents
    /// let m = Metered::from_rate_minutes(Money::from_cents(150), 1);
    /// assert_eq!(m.to_money().cents(), 3);
    /// ```
    pub fn to_money(&self) -> Money {
        let unit = MINUTES_PER_HOUR as i128;
        let half = unit / 2;
        let cents = if self.0 < 0 {
            -((-self.0 + half) / unit)
        } else {
            (self.0 + half) / unit
        };
        let cents = i64::try_from(cents).unwrap_or(if cents < 0 { i64::MIN } else { i64::MAX });
        Money::from_cents(cents)
    }
}

impl Add for Metered {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Metered(self.0 + other.0)
    }
}

impl From<Money> for Metered {
    fn from(money: Money) -> Self {
        Metered::from_money(money)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1175).to_string(), "11.75");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Money::parse_decimal("1").unwrap().cents(), 100);
        assert_eq!(Money::parse_decimal("1.5").unwrap().cents(), 150);
        assert_eq!(Money::parse_decimal("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse_decimal("-2.25").unwrap().cents(), -225);
        assert_eq!("8".parse::<Money>().unwrap().cents(), 800);
    }

    #[test]
    fn test_parse_decimal_rejects_bad_input() {
        assert!(matches!(
            Money::parse_decimal("  "),
            Err(ValidationError::Required { .. })
        ));
        assert!(Money::parse_decimal("1.").is_err());
        assert!(Money::parse_decimal(".5").is_err());
        assert!(Money::parse_decimal("1.234").is_err());
        assert!(Money::parse_decimal("1,5").is_err());
        assert!(Money::parse_decimal("1e3").is_err());
        assert!(matches!(
            Money::parse_decimal("99999999999999999999"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3).cents(), 3000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_metered_exact_hours() {
        // 2.5 hours at 1.00/hour
        let m = Metered::from_rate_minutes(Money::from_cents(100), 150);
        assert_eq!(m.to_money().cents(), 250);
    }

    #[test]
    fn test_metered_keeps_precision_until_rounded() {
        // 1 minute at 1.00/hour is 1.67 cents, 1 minute at 0.50/hour is 0.83
        let console = Metered::from_rate_minutes(Money::from_cents(100), 1);
        let add_on = Metered::from_rate_minutes(Money::from_cents(50), 1);

        assert_eq!(console.to_money().cents(), 2);
        assert_eq!(add_on.to_money().cents(), 1);
        // The exact sum is 2.5 cents, rounded once
        assert_eq!((console + add_on).to_money().cents(), 3);
    }

    #[test]
    fn test_metered_from_money() {
        let m = Metered::from(Money::from_cents(800));
        assert_eq!(m.to_money().cents(), 800);
        assert_eq!(Metered::zero().to_money(), Money::zero());
    }

    #[test]
    fn test_metered_saturates_instead_of_wrapping() {
        let huge = Metered::from_rate_minutes(Money::from_cents(i64::MAX), 120);
        assert_eq!(huge.to_money().cents(), i64::MAX);
        assert!(!huge.to_money().is_negative());
    }

    #[test]
    fn test_multiply_quantity_saturates() {
        let price = Money::from_cents(i64::MAX / 2);
        assert_eq!(price.multiply_quantity(999).cents(), i64::MAX);
    }
}
