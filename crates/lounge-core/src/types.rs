//! # Domain Types
//!
//! Console tiers and the lounge tariff.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ConsoleKind    │   │   HourlyRate    │   │     Tariff      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Standard (PS3) │   │  Money / hour   │   │  standard 1.00  │       │
//! │  │  Premium  (PS4) │   │  charge(min)    │   │  premium  1.50  │       │
//! │  └─────────────────┘   └─────────────────┘   │  add_on   0.50  │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::{Metered, Money};

// =============================================================================
// Console Kind
// =============================================================================

/// A rentable console tier.
///
/// "No console" is modelled as `Option<ConsoleKind>::None` on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleKind {
    /// Console A: PlayStation 3.
    Standard,
    /// Console B: PlayStation 4.
    Premium,
}

impl ConsoleKind {
    /// Name shown next to the selection toggle.
    pub const fn label(&self) -> &'static str {
        match self {
            ConsoleKind::Standard => "PlayStation 3",
            ConsoleKind::Premium => "PlayStation 4",
        }
    }

    /// Abbreviation used on bill lines.
    pub const fn short_label(&self) -> &'static str {
        match self {
            ConsoleKind::Standard => "PS3",
            ConsoleKind::Premium => "PS4",
        }
    }
}

impl fmt::Display for ConsoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Hourly Rate
// =============================================================================

/// A price per hour of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HourlyRate(Money);

impl HourlyRate {
    #[inline]
    pub const fn new(per_hour: Money) -> Self {
        HourlyRate(per_hour)
    }

    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        HourlyRate(Money::from_cents(cents))
    }

    #[inline]
    pub const fn zero() -> Self {
        HourlyRate(Money::zero())
    }

    #[inline]
    pub const fn per_hour(&self) -> Money {
        self.0
    }

    /// Charge for `minutes` of play, billed proportionally (never rounded
    /// up to whole hours).
    ///
    /// ## Example
    /// ```rust
    /// use lounge_core::types::HourlyRate;
    ///
    /// let rate = HourlyRate::from_cents(150); // 1.50 per hour
    /// assert_eq!(rate.charge(120).to_money().cents(), 300);
    /// assert_eq!(rate.charge(90).to_money().cents(), 225);
    /// ```
    #[inline]
    pub const fn charge(&self, minutes: u32) -> Metered {
        Metered::from_rate_minutes(self.0, minutes)
    }
}

impl fmt::Display for HourlyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/h", self.0)
    }
}

// =============================================================================
// Tariff
// =============================================================================

/// The lounge's hourly price list.
///
/// ## Invariant
/// `premium > standard`; checked by [`crate::validation::validate_tariff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Tariff {
    pub standard: HourlyRate,
    pub premium: HourlyRate,
    /// Extra controller, same price whichever console is rented.
    pub add_on: HourlyRate,
}

impl Tariff {
    /// Rate for the selected console; `None` rents nothing and costs nothing.
    pub const fn console_rate(&self, console: Option<ConsoleKind>) -> HourlyRate {
        match console {
            None => HourlyRate::zero(),
            Some(ConsoleKind::Standard) => self.standard,
            Some(ConsoleKind::Premium) => self.premium,
        }
    }
}

impl Default for Tariff {
    /// 1.00 / 1.50 per hour for the two consoles, 0.50 per hour for an
    /// extra controller.
    fn default() -> Self {
        Tariff {
            standard: HourlyRate::from_cents(100),
            premium: HourlyRate::from_cents(150),
            add_on: HourlyRate::from_cents(50),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_labels() {
        assert_eq!(ConsoleKind::Standard.label(), "PlayStation 3");
        assert_eq!(ConsoleKind::Premium.short_label(), "PS4");
        assert_eq!(ConsoleKind::Premium.to_string(), "PlayStation 4");
    }

    #[test]
    fn test_console_rate_lookup() {
        let tariff = Tariff::default();
        assert_eq!(tariff.console_rate(None), HourlyRate::zero());
        assert_eq!(
            tariff.console_rate(Some(ConsoleKind::Standard)),
            HourlyRate::from_cents(100)
        );
        assert_eq!(
            tariff.console_rate(Some(ConsoleKind::Premium)),
            HourlyRate::from_cents(150)
        );
    }

    #[test]
    fn test_default_premium_costs_more() {
        let tariff = Tariff::default();
        assert!(tariff.premium > tariff.standard);
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(HourlyRate::from_cents(150).to_string(), "1.50/h");
    }

    #[test]
    fn test_console_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ConsoleKind::Premium).unwrap();
        assert_eq!(json, "\"premium\"");
    }
}
