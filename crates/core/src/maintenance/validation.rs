//! Strategy-required field validation
//!
//! Pure checks that run before any call to the monitoring system. Every
//! failure for the chosen strategy is accumulated and reported in one pass.

use std::fmt;

use quiesce_domain::MaintenanceStrategy;

use super::config::MaintenanceConfig;

/// One missing-field failure, naming the offending configuration field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: &'static str,
    pub message: String,
}

impl ValidationFailure {
    fn required(field: &'static str, strategy: MaintenanceStrategy) -> Self {
        Self { field, message: format!("is required when strategy is '{}'", strategy) }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Check that the configuration carries every field its strategy requires.
///
/// Unset and empty are treated alike: the host layers this subsystem serves
/// cannot distinguish them. Returns all failures, never just the first.
/// Performs no I/O.
pub fn validate_config(config: &MaintenanceConfig) -> Vec<ValidationFailure> {
    let strategy = config.strategy;
    let mut failures = Vec::new();
    let mut require = |field: &'static str, present: bool| {
        if !present {
            failures.push(ValidationFailure::required(field, strategy));
        }
    };

    match strategy {
        MaintenanceStrategy::Manual => {}
        MaintenanceStrategy::Single => {
            require("start_date", is_set(config.start_date.as_deref()));
            require("end_date", is_set(config.end_date.as_deref()));
        }
        MaintenanceStrategy::RecurringInterval => {
            require("interval_days", config.interval_days.is_some());
            require("start_time", config.start_time.is_some());
            require("end_time", config.end_time.is_some());
        }
        MaintenanceStrategy::RecurringWeekday => {
            require("weekdays", config.weekdays.as_ref().is_some_and(|list| !list.is_empty()));
            require("start_time", config.start_time.is_some());
            require("end_time", config.end_time.is_some());
        }
        MaintenanceStrategy::RecurringDayOfMonth => {
            require(
                "days_of_month",
                config.days_of_month.as_ref().is_some_and(|list| !list.is_empty()),
            );
            require("start_time", config.start_time.is_some());
            require("end_time", config.end_time.is_some());
        }
        MaintenanceStrategy::Cron => {
            require("cron", is_set(config.cron.as_deref()));
            require("duration_minutes", config.duration_minutes.is_some());
        }
    }

    failures
}

fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|raw| !raw.is_empty())
}
