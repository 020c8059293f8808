//! Read-path mapper: canonical domain object to configuration
//!
//! Pure and total over anything the monitoring system can return. Unset
//! values arrive as empty strings and zeroes; presence guards turn them into
//! explicit `None`s instead of letting stale values leak into the
//! configuration after a strategy change.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use quiesce_domain::{
    MaintenanceStatus, MaintenanceStrategy, MaintenanceWindow, TimeRange, Timeslot,
};

use super::config::{MaintenanceConfig, TimeOfDayConfig, TimeslotConfig};

/// Rehydrate the flat configuration from a window the monitoring system
/// returned.
///
/// Only the fields of the window's current strategy are rehydrated; the
/// timeslot list is always present (possibly empty) so a successful read is
/// distinguishable from "never read".
pub fn domain_to_config(window: &MaintenanceWindow) -> MaintenanceConfig {
    let mut config = MaintenanceConfig {
        id: window.id,
        title: window.title.clone(),
        description: window.description.clone(),
        strategy: window.strategy,
        active: window.active,
        status: non_empty(&window.status).map(MaintenanceStatus::parse),
        timezone: non_empty(&window.timezone).map(str::to_string),
        timezone_offset: non_empty(&window.timezone_offset).map(str::to_string),
        duration_minutes: positive(window.duration),
        cron: non_empty(&window.cron).map(str::to_string),
        timeslots: Some(window.timeslots.iter().map(timeslot_to_config).collect()),
        ..MaintenanceConfig::default()
    };

    match window.strategy {
        MaintenanceStrategy::Manual => {}
        MaintenanceStrategy::Single => {
            if let Some((start, end)) = window.date_range.complete() {
                config.start_date = Some(format_rfc3339(start));
                config.end_date = Some(format_rfc3339(end));
            }
        }
        MaintenanceStrategy::RecurringInterval => {
            config.interval_days = positive(window.interval_day);
            split_time_range(&mut config, window.time_range);
        }
        MaintenanceStrategy::RecurringWeekday => {
            config.weekdays = Some(window.weekdays.clone());
            split_time_range(&mut config, window.time_range);
        }
        MaintenanceStrategy::RecurringDayOfMonth => {
            // Canonical string form for numeric days and sentinels alike
            config.days_of_month =
                Some(window.days_of_month.iter().map(ToString::to_string).collect());
            split_time_range(&mut config, window.time_range);
        }
        // Expression and duration are covered by the unconditional rules above
        MaintenanceStrategy::Cron => {}
    }

    config
}

fn split_time_range(config: &mut MaintenanceConfig, time_range: Option<TimeRange>) {
    if let Some(range) = time_range {
        config.start_time = Some(TimeOfDayConfig::from(range.start));
        config.end_time = Some(TimeOfDayConfig::from(range.end));
    }
}

fn timeslot_to_config(slot: &Timeslot) -> TimeslotConfig {
    TimeslotConfig {
        start_date: format_rfc3339(slot.start_date),
        end_date: format_rfc3339(slot.end_date),
    }
}

fn format_rfc3339(value: DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

fn positive(value: i64) -> Option<i64> {
    (value > 0).then_some(value)
}
