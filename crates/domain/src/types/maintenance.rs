//! Canonical maintenance-window object
//!
//! The monitoring system owns this object and computes its derived fields
//! (status, resolved timezone, duration, timeslots). This crate only models
//! its shape; all mutation goes through the lifecycle service.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::schedule::{DateRange, DayOfMonth, MaintenanceStrategy, TimeRange};

/// Scheduling state computed by the monitoring system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceStatus {
    Inactive,
    Scheduled,
    UnderMaintenance,
    Ended,
    /// Fallback for any status string this build does not know
    #[serde(other)]
    Unknown,
}

impl MaintenanceStatus {
    /// Interpret a raw status string, folding unrecognized values to
    /// `Unknown` rather than failing the read
    pub fn parse(value: &str) -> Self {
        match value {
            "inactive" => Self::Inactive,
            "scheduled" => Self::Scheduled,
            "under-maintenance" => Self::UnderMaintenance,
            "ended" => Self::Ended,
            _ => Self::Unknown,
        }
    }

    /// Stable wire string for this status
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Scheduled => "scheduled",
            Self::UnderMaintenance => "under-maintenance",
            Self::Ended => "ended",
            Self::Unknown => "unknown",
        }
    }
}

/// One concrete computed occurrence of a scheduled window
///
/// Produced only by the monitoring system, never authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeslot {
    pub start_date: DateTime<FixedOffset>,
    pub end_date: DateTime<FixedOffset>,
}

/// Flat canonical window object exchanged with the monitoring system
///
/// The external system reports unset scalar fields as `""` / `0`; the read
/// path filters those through presence guards instead of trusting them.
/// Exactly one strategy's fields are meaningful at a time, and the write
/// path nulls every other strategy's fields rather than leaving them stale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaintenanceWindow {
    /// Assigned by the monitoring system on create; immutable afterwards
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub strategy: MaintenanceStrategy,
    pub active: bool,
    /// Day interval of the recurring-interval strategy; 0 = unset
    pub interval_day: i64,
    /// Weekday numbers (1 = Monday .. 7 = Sunday), original order preserved
    pub weekdays: Vec<u8>,
    /// Day-of-month specifiers, original order preserved
    pub days_of_month: Vec<DayOfMonth>,
    pub time_range: Option<TimeRange>,
    /// Cron expression; empty = unset
    pub cron: String,
    /// Duration in minutes; 0 = unset
    pub duration: i64,
    /// Authored timezone option; empty = unset
    pub timezone_option: String,
    pub date_range: DateRange,
    /// Computed: raw status string, empty until the system has evaluated it
    pub status: String,
    /// Computed: resolved timezone name, empty until known
    pub timezone: String,
    /// Computed: offset of the resolved timezone, empty until known
    pub timezone_offset: String,
    /// Computed: ordered occurrence list
    pub timeslots: Vec<Timeslot>,
}

impl MaintenanceWindow {
    /// Blank window carrying only identity fields; every schedule field
    /// starts out unset
    pub fn new(title: &str, description: &str, strategy: MaintenanceStrategy) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            strategy,
            date_range: DateRange::unset(),
            ..Self::default()
        }
    }
}
