//! Host-facing configuration model
//!
//! The flat shape the configuration-management host authors and reads back.
//! Strategy-variant fields are optional; which of them are required is
//! decided by the validator, not by this type.

use quiesce_domain::{MaintenanceStatus, MaintenanceStrategy, TimeOfDay};
use serde::{Deserialize, Serialize};

/// Raw time-of-day components as authored by the host.
///
/// Deliberately untyped wider than [`TimeOfDay`]; range enforcement happens
/// at the domain boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDayConfig {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl From<TimeOfDay> for TimeOfDayConfig {
    fn from(time: TimeOfDay) -> Self {
        Self {
            hours: i64::from(time.hours),
            minutes: i64::from(time.minutes),
            seconds: i64::from(time.seconds),
        }
    }
}

/// One computed occurrence as exposed to the host: a (start, end) RFC3339
/// pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeslotConfig {
    pub start_date: String,
    pub end_date: String,
}

/// Flat maintenance-window configuration.
///
/// Computed fields (`status`, `timezone`, `timezone_offset`, `timeslots`)
/// are only ever written by the read path; `None` means "not yet known".
/// For `timeslots`, `None` means "never read" while `Some(vec![])` means
/// "read, zero scheduled occurrences".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceConfig {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub strategy: MaintenanceStrategy,
    pub active: bool,
    /// Strategy `single`: RFC3339 start of the window
    pub start_date: Option<String>,
    /// Strategy `single`: RFC3339 end of the window
    pub end_date: Option<String>,
    /// Strategy `recurring-interval`: repeat every N days
    pub interval_days: Option<i64>,
    /// Strategy `recurring-weekday`: weekday numbers, 1 = Monday .. 7 = Sunday
    pub weekdays: Option<Vec<u8>>,
    /// Strategy `recurring-day-of-month`: day numbers or `lastDay<n>` sentinels
    pub days_of_month: Option<Vec<String>>,
    pub start_time: Option<TimeOfDayConfig>,
    pub end_time: Option<TimeOfDayConfig>,
    /// Strategy `cron`: cron expression
    pub cron: Option<String>,
    /// Strategy `cron`: occurrence length in minutes
    pub duration_minutes: Option<i64>,
    pub timezone_option: Option<String>,
    /// Computed by the monitoring system
    pub status: Option<MaintenanceStatus>,
    /// Computed: resolved timezone name
    pub timezone: Option<String>,
    /// Computed: offset of the resolved timezone
    pub timezone_offset: Option<String>,
    /// Computed: ordered occurrence list
    pub timeslots: Option<Vec<TimeslotConfig>>,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            strategy: MaintenanceStrategy::Manual,
            // Windows default to active, matching the monitoring system
            active: true,
            start_date: None,
            end_date: None,
            interval_days: None,
            weekdays: None,
            days_of_month: None,
            start_time: None,
            end_time: None,
            cron: None,
            duration_minutes: None,
            timezone_option: None,
            status: None,
            timezone: None,
            timezone_offset: None,
            timeslots: None,
        }
    }
}
