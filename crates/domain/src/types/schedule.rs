//! Schedule value types
//!
//! Immutable building blocks for maintenance-window schedules: the strategy
//! discriminator, time-of-day pairs, day-of-month specifiers, and the
//! concrete/unset date range.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::errors::{QuiesceError, Result};

/// Recurrence strategy of a maintenance window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceStrategy {
    /// No schedule; the window is switched on and off by hand
    Manual,
    /// One concrete (start, end) period
    Single,
    /// Repeats every N days
    RecurringInterval,
    /// Repeats on selected weekdays
    RecurringWeekday,
    /// Repeats on selected days of the month
    RecurringDayOfMonth,
    /// Driven by a cron expression plus a duration
    Cron,
}

impl MaintenanceStrategy {
    /// Stable wire string for this strategy
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Single => "single",
            Self::RecurringInterval => "recurring-interval",
            Self::RecurringWeekday => "recurring-weekday",
            Self::RecurringDayOfMonth => "recurring-day-of-month",
            Self::Cron => "cron",
        }
    }
}

impl Default for MaintenanceStrategy {
    fn default() -> Self {
        Self::Manual
    }
}

impl fmt::Display for MaintenanceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-of-day triple
///
/// Components are range-checked on construction; a value that made it into
/// this type is always a valid wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimeOfDay {
    /// Build from raw host-supplied components.
    ///
    /// # Errors
    ///
    /// Returns `QuiesceError::Conversion` when any component is out of range
    /// (hours 0-23, minutes/seconds 0-59).
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Result<Self> {
        if !(0..24).contains(&hours) {
            return Err(QuiesceError::Conversion(format!("hours out of range: {}", hours)));
        }
        if !(0..60).contains(&minutes) {
            return Err(QuiesceError::Conversion(format!("minutes out of range: {}", minutes)));
        }
        if !(0..60).contains(&seconds) {
            return Err(QuiesceError::Conversion(format!("seconds out of range: {}", seconds)));
        }
        Ok(Self { hours: hours as u8, minutes: minutes as u8, seconds: seconds as u8 })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// A (start, end) pair of times of day, always supplied together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// One day-of-month specifier
///
/// Either a plain calendar day or a distance from the end of the month
/// (canonical string form `lastDay<n>`). Numeric days are passed through as
/// authored without a 1-31 range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DayOfMonthRepr", try_from = "DayOfMonthRepr")]
pub enum DayOfMonth {
    /// Plain calendar day
    Day(i64),
    /// The n-th day counting back from the last day of the month
    FromEnd(u8),
}

impl FromStr for DayOfMonth {
    type Err = QuiesceError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(offset) = trimmed.strip_prefix("lastDay") {
            let offset = offset.parse::<u8>().map_err(|_| {
                QuiesceError::Conversion(format!("invalid last-day specifier: {}", s))
            })?;
            return Ok(Self::FromEnd(offset));
        }
        trimmed
            .parse::<i64>()
            .map(Self::Day)
            .map_err(|_| QuiesceError::Conversion(format!("invalid day-of-month value: {}", s)))
    }
}

impl fmt::Display for DayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(day) => write!(f, "{}", day),
            Self::FromEnd(offset) => write!(f, "lastDay{}", offset),
        }
    }
}

/// Wire shape of a day-of-month entry: number for plain days, string for
/// the last-day sentinel. Formatting happens only at this edge.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DayOfMonthRepr {
    Number(i64),
    Text(String),
}

impl From<DayOfMonth> for DayOfMonthRepr {
    fn from(value: DayOfMonth) -> Self {
        match value {
            DayOfMonth::Day(day) => Self::Number(day),
            DayOfMonth::FromEnd(_) => Self::Text(value.to_string()),
        }
    }
}

impl TryFrom<DayOfMonthRepr> for DayOfMonth {
    type Error = QuiesceError;

    fn try_from(value: DayOfMonthRepr) -> Result<Self> {
        match value {
            DayOfMonthRepr::Number(day) => Ok(Self::Day(day)),
            DayOfMonthRepr::Text(text) => text.parse(),
        }
    }
}

/// Concrete (start, end) bounds of a window, or the unset sentinel used by
/// every recurring strategy to mean "derive occurrences from the rule"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
}

impl DateRange {
    /// The sentinel pair: both slots empty
    pub const fn unset() -> Self {
        Self { start: None, end: None }
    }

    /// Both endpoints, only when the range is fully specified
    pub fn complete(&self) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// Validated schedule payload of a maintenance window
///
/// Exactly one variant is meaningful per window at a time, so a field can
/// never be read or written under the wrong strategy. The timezone option
/// belongs to the four variants that schedule wall-clock time.
#[derive(Debug, Clone, PartialEq)]
pub enum MaintenanceSchedule {
    Manual,
    Single {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        timezone: Option<String>,
    },
    Interval {
        interval_days: i64,
        time_range: Option<TimeRange>,
        timezone: Option<String>,
    },
    Weekday {
        weekdays: Vec<u8>,
        time_range: Option<TimeRange>,
        timezone: Option<String>,
    },
    DayOfMonth {
        days: Vec<DayOfMonth>,
        time_range: Option<TimeRange>,
        timezone: Option<String>,
    },
    Cron {
        expression: String,
        duration_minutes: i64,
    },
}

impl MaintenanceSchedule {
    /// The discriminator this payload belongs to
    pub const fn strategy(&self) -> MaintenanceStrategy {
        match self {
            Self::Manual => MaintenanceStrategy::Manual,
            Self::Single { .. } => MaintenanceStrategy::Single,
            Self::Interval { .. } => MaintenanceStrategy::RecurringInterval,
            Self::Weekday { .. } => MaintenanceStrategy::RecurringWeekday,
            Self::DayOfMonth { .. } => MaintenanceStrategy::RecurringDayOfMonth,
            Self::Cron { .. } => MaintenanceStrategy::Cron,
        }
    }
}
