//! Write-path mapper: configuration to canonical domain object
//!
//! Assumes the configuration already passed `validate_config`. Builds the
//! typed schedule first, then projects it onto a blank window so every
//! other strategy's fields are structurally nulled rather than left stale.

use chrono::{DateTime, FixedOffset};
use quiesce_domain::{
    DateRange, DayOfMonth, MaintenanceSchedule, MaintenanceStrategy, MaintenanceWindow,
    QuiesceError, Result, TimeOfDay, TimeRange,
};

use super::config::MaintenanceConfig;

/// Build the typed schedule payload for the configuration's strategy.
///
/// # Errors
///
/// `QuiesceError::Parse` when a `single` timestamp is not RFC3339 (the first
/// malformed field aborts, unlike the accumulating validator), and
/// `QuiesceError::Conversion` when a nested time-of-day is malformed.
pub fn schedule_from_config(config: &MaintenanceConfig) -> Result<MaintenanceSchedule> {
    match config.strategy {
        MaintenanceStrategy::Manual => Ok(MaintenanceSchedule::Manual),
        MaintenanceStrategy::Single => {
            let start = parse_rfc3339("start_date", config.start_date.as_deref())?;
            let end = parse_rfc3339("end_date", config.end_date.as_deref())?;
            Ok(MaintenanceSchedule::Single { start, end, timezone: config.timezone_option.clone() })
        }
        MaintenanceStrategy::RecurringInterval => Ok(MaintenanceSchedule::Interval {
            interval_days: config.interval_days.unwrap_or_default(),
            time_range: time_range_from_config(config)?,
            timezone: config.timezone_option.clone(),
        }),
        MaintenanceStrategy::RecurringWeekday => Ok(MaintenanceSchedule::Weekday {
            // Copied verbatim: no sorting, no de-duplication
            weekdays: config.weekdays.clone().unwrap_or_default(),
            time_range: time_range_from_config(config)?,
            timezone: config.timezone_option.clone(),
        }),
        MaintenanceStrategy::RecurringDayOfMonth => {
            let days = config
                .days_of_month
                .iter()
                .flatten()
                .map(|raw| raw.parse::<DayOfMonth>())
                .collect::<Result<Vec<_>>>()?;
            Ok(MaintenanceSchedule::DayOfMonth {
                days,
                time_range: time_range_from_config(config)?,
                timezone: config.timezone_option.clone(),
            })
        }
        MaintenanceStrategy::Cron => Ok(MaintenanceSchedule::Cron {
            expression: config.cron.clone().unwrap_or_default(),
            duration_minutes: config.duration_minutes.unwrap_or_default(),
        }),
    }
}

/// Map a validated configuration to the canonical window object.
///
/// The returned window carries the configuration's identifier (if any), so
/// it is usable for both create and update calls.
pub fn config_to_domain(config: &MaintenanceConfig) -> Result<MaintenanceWindow> {
    let schedule = schedule_from_config(config)?;
    let mut window = MaintenanceWindow::new(&config.title, &config.description, schedule.strategy());
    window.id = config.id;
    window.active = config.active;
    apply_schedule(&mut window, schedule);
    Ok(window)
}

fn apply_schedule(window: &mut MaintenanceWindow, schedule: MaintenanceSchedule) {
    match schedule {
        MaintenanceSchedule::Manual => {
            window.date_range = DateRange::unset();
        }
        MaintenanceSchedule::Single { start, end, timezone } => {
            window.date_range = DateRange { start: Some(start), end: Some(end) };
            window.timezone_option = timezone.unwrap_or_default();
        }
        MaintenanceSchedule::Interval { interval_days, time_range, timezone } => {
            window.date_range = DateRange::unset();
            window.interval_day = interval_days;
            window.time_range = time_range;
            window.timezone_option = timezone.unwrap_or_default();
        }
        MaintenanceSchedule::Weekday { weekdays, time_range, timezone } => {
            window.date_range = DateRange::unset();
            window.weekdays = weekdays;
            window.time_range = time_range;
            window.timezone_option = timezone.unwrap_or_default();
        }
        MaintenanceSchedule::DayOfMonth { days, time_range, timezone } => {
            window.date_range = DateRange::unset();
            window.days_of_month = days;
            window.time_range = time_range;
            window.timezone_option = timezone.unwrap_or_default();
        }
        MaintenanceSchedule::Cron { expression, duration_minutes } => {
            window.date_range = DateRange::unset();
            window.cron = expression;
            window.duration = duration_minutes;
        }
    }
}

fn parse_rfc3339(field: &str, value: Option<&str>) -> Result<DateTime<FixedOffset>> {
    let raw = value.unwrap_or_default();
    DateTime::parse_from_rfc3339(raw).map_err(|err| {
        QuiesceError::Parse(format!("{} '{}' is not a valid RFC3339 timestamp: {}", field, raw, err))
    })
}

/// The domain time range exists only when both ends were authored; a single
/// side is left unset, not an error.
fn time_range_from_config(config: &MaintenanceConfig) -> Result<Option<TimeRange>> {
    match (config.start_time, config.end_time) {
        (Some(start), Some(end)) => Ok(Some(TimeRange {
            start: TimeOfDay::new(start.hours, start.minutes, start.seconds)?,
            end: TimeOfDay::new(end.hours, end.minutes, end.seconds)?,
        })),
        _ => Ok(None),
    }
}
