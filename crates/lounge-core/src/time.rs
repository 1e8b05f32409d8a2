//! # Time Module
//!
//! Wall-clock times of day and the elapsed minutes between them.
//!
//! ## Overnight Sessions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  start 23:00 (1380)            end 01:00 (60)                          │
//! │                                                                         │
//! │  end < start → the session crossed midnight                            │
//! │  end += 1440  → 1500                                                   │
//! │  elapsed      = 1500 - 1380 = 120 minutes                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only a time of day is known, never a date, so a session can span at most
//! one midnight. Equal start and end times mean no play, not 24 hours.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::{MINUTES_PER_DAY, MINUTES_PER_HOUR};

// =============================================================================
// Time Of Day
// =============================================================================

/// A 24-hour wall-clock time with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(try_from = "TimeOfDayData")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

#[derive(Deserialize)]
struct TimeOfDayData {
    hour: u8,
    minute: u8,
}

impl TryFrom<TimeOfDayData> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(data: TimeOfDayData) -> Result<Self, Self::Error> {
        TimeOfDay::new(data.hour, data.minute)
    }
}

impl TimeOfDay {
    /// Creates a time of day, rejecting hours above 23 and minutes above 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::OutOfRange {
                field: "hour".to_string(),
                min: 0,
                max: 23,
            });
        }
        if minute > 59 {
            return Err(ValidationError::OutOfRange {
                field: "minute".to_string(),
                min: 0,
                max: 59,
            });
        }
        Ok(TimeOfDay { hour, minute })
    }

    /// Parses a 24-hour `"HH:MM"` string.
    ///
    /// ## Example
    /// ```rust
    /// use lounge_core::time::TimeOfDay;
    ///
    /// let t = TimeOfDay::parse("23:05").unwrap();
    /// assert_eq!(t.minutes_since_midnight(), 23 * 60 + 5);
    /// assert!(TimeOfDay::parse("24:00").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "time".to_string(),
            });
        }

        let parsed =
            NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| ValidationError::InvalidFormat {
                field: "time".to_string(),
                reason: format!("expected HH:MM ({e})"),
            })?;

        Ok(TimeOfDay {
            hour: parsed.hour() as u8,
            minute: parsed.minute() as u8,
        })
    }

    /// Lenient form of [`TimeOfDay::parse`] for raw picker input: anything
    /// empty, partial or invalid counts as "unset".
    pub fn parse_input(input: &str) -> Option<Self> {
        TimeOfDay::parse(input).ok()
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn minutes_since_midnight(&self) -> u32 {
        self.hour as u32 * MINUTES_PER_HOUR + self.minute as u32
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

// =============================================================================
// Interval Math
// =============================================================================

/// Minutes played between `start` and `end`.
///
/// ## Rules
/// - Either time unset → 0
/// - `end < start` → the session crossed midnight, add one day to `end`
/// - Never negative
///
/// ## Example
/// ```rust
/// use lounge_core::time::{elapsed_minutes, TimeOfDay};
///
/// let start = TimeOfDay::parse_input("14:00");
/// let end = TimeOfDay::parse_input("16:30");
/// assert_eq!(elapsed_minutes(start, end), 150);
///
/// let late = TimeOfDay::parse_input("23:00");
/// let early = TimeOfDay::parse_input("01:00");
/// assert_eq!(elapsed_minutes(late, early), 120);
///
/// assert_eq!(elapsed_minutes(start, None), 0);
/// ```
pub fn elapsed_minutes(start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> u32 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };

    let start_minutes = start.minutes_since_midnight();
    let mut end_minutes = end.minutes_since_midnight();

    if end_minutes < start_minutes {
        end_minutes += MINUTES_PER_DAY;
    }

    end_minutes.saturating_sub(start_minutes)
}

/// Renders a duration as `"2h 30m"`.
pub fn format_duration(minutes: u32) -> String {
    format!(
        "{}h {}m",
        minutes / MINUTES_PER_HOUR,
        minutes % MINUTES_PER_HOUR
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Option<TimeOfDay> {
        TimeOfDay::parse_input(s)
    }

    #[test]
    fn test_parse_valid_times() {
        let time = TimeOfDay::parse("09:45").unwrap();
        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 45);
        assert_eq!(TimeOfDay::parse("00:00").unwrap().minutes_since_midnight(), 0);
        assert_eq!(
            TimeOfDay::parse("23:59").unwrap().minutes_since_midnight(),
            1439
        );
    }

    #[test]
    fn test_parse_invalid_times_are_unset() {
        assert_eq!(t(""), None);
        assert_eq!(t("7:"), None);
        assert_eq!(t("24:00"), None);
        assert_eq!(t("12:60"), None);
        assert_eq!(t("ab:cd"), None);
        assert_eq!(t("12:30:15"), None);
    }

    #[test]
    fn test_parse_empty_is_required_error() {
        assert!(matches!(
            TimeOfDay::parse("   "),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_new_bounds() {
        assert!(TimeOfDay::new(23, 59).is_ok());
        assert!(TimeOfDay::new(24, 0).is_err());
        assert!(TimeOfDay::new(0, 60).is_err());
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(TimeOfDay::new(7, 5).unwrap().to_string(), "07:05");
    }

    #[test]
    fn test_same_day_interval() {
        assert_eq!(elapsed_minutes(t("14:00"), t("16:30")), 150);
        assert_eq!(elapsed_minutes(t("00:00"), t("23:59")), 1439);
    }

    #[test]
    fn test_overnight_interval() {
        assert_eq!(elapsed_minutes(t("23:00"), t("01:00")), 120);
        assert_eq!(elapsed_minutes(t("22:15"), t("00:00")), 105);
    }

    #[test]
    fn test_equal_times_are_zero() {
        assert_eq!(elapsed_minutes(t("18:00"), t("18:00")), 0);
    }

    #[test]
    fn test_unset_times_are_zero() {
        assert_eq!(elapsed_minutes(None, t("18:00")), 0);
        assert_eq!(elapsed_minutes(t("18:00"), None), 0);
        assert_eq!(elapsed_minutes(None, None), 0);
    }

    #[test]
    fn test_wraparound_matches_formula() {
        for (start, end) in [("10:00", "09:59"), ("12:30", "12:29"), ("20:00", "03:45")] {
            let (s, e) = (t(start).unwrap(), t(end).unwrap());
            let expected = e.minutes_since_midnight() + MINUTES_PER_DAY - s.minutes_since_midnight();
            assert_eq!(elapsed_minutes(Some(s), Some(e)), expected);
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(150), "2h 30m");
        assert_eq!(format_duration(0), "0h 0m");
        assert_eq!(format_duration(1439), "23h 59m");
    }
}
