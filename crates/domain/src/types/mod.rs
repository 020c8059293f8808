//! Domain types for maintenance windows

pub mod maintenance;
pub mod schedule;

// Re-export the full type surface for convenience
pub use maintenance::{MaintenanceStatus, MaintenanceWindow, Timeslot};
pub use schedule::{
    DateRange, DayOfMonth, MaintenanceSchedule, MaintenanceStrategy, TimeOfDay, TimeRange,
};
