//! Typed attribute schema for the maintenance-window resource
//!
//! Mirrors the flat configuration shape field by field so the host can
//! mark which attributes users must author, may author, and can only read.

/// How the host must treat an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMode {
    /// Must be authored
    Required,
    /// May be authored; which optionals are actually required is decided by
    /// the strategy validator, not the schema
    Optional,
    /// Written only by the monitoring system, never authored
    Computed,
}

/// One attribute of the maintenance-window resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub mode: AttributeMode,
    pub description: &'static str,
}

/// Attribute table of the maintenance-window resource, in configuration
/// field order
pub const MAINTENANCE_WINDOW_SCHEMA: &[AttributeSchema] = &[
    AttributeSchema {
        name: "id",
        mode: AttributeMode::Computed,
        description: "Identifier assigned by the monitoring system",
    },
    AttributeSchema {
        name: "title",
        mode: AttributeMode::Required,
        description: "Human-readable window title",
    },
    AttributeSchema {
        name: "description",
        mode: AttributeMode::Optional,
        description: "Free-form description",
    },
    AttributeSchema {
        name: "strategy",
        mode: AttributeMode::Required,
        description: "Recurrence strategy discriminator",
    },
    AttributeSchema {
        name: "active",
        mode: AttributeMode::Optional,
        description: "Whether the window suppresses alerts at all",
    },
    AttributeSchema {
        name: "start_date",
        mode: AttributeMode::Optional,
        description: "RFC3339 start of a single window",
    },
    AttributeSchema {
        name: "end_date",
        mode: AttributeMode::Optional,
        description: "RFC3339 end of a single window",
    },
    AttributeSchema {
        name: "interval_days",
        mode: AttributeMode::Optional,
        description: "Repeat interval in days",
    },
    AttributeSchema {
        name: "weekdays",
        mode: AttributeMode::Optional,
        description: "Weekday numbers, 1 = Monday through 7 = Sunday",
    },
    AttributeSchema {
        name: "days_of_month",
        mode: AttributeMode::Optional,
        description: "Day numbers or lastDay<n> sentinels",
    },
    AttributeSchema {
        name: "start_time",
        mode: AttributeMode::Optional,
        description: "Daily start time of recurring occurrences",
    },
    AttributeSchema {
        name: "end_time",
        mode: AttributeMode::Optional,
        description: "Daily end time of recurring occurrences",
    },
    AttributeSchema {
        name: "cron",
        mode: AttributeMode::Optional,
        description: "Cron expression driving occurrences",
    },
    AttributeSchema {
        name: "duration_minutes",
        mode: AttributeMode::Optional,
        description: "Occurrence length for cron-driven windows",
    },
    AttributeSchema {
        name: "timezone_option",
        mode: AttributeMode::Optional,
        description: "Timezone the schedule is authored in",
    },
    AttributeSchema {
        name: "status",
        mode: AttributeMode::Computed,
        description: "Scheduling state computed by the monitoring system",
    },
    AttributeSchema {
        name: "timezone",
        mode: AttributeMode::Computed,
        description: "Resolved timezone name",
    },
    AttributeSchema {
        name: "timezone_offset",
        mode: AttributeMode::Computed,
        description: "Offset of the resolved timezone",
    },
    AttributeSchema {
        name: "timeslots",
        mode: AttributeMode::Computed,
        description: "Ordered list of computed occurrences",
    },
];

/// Look up one attribute by name
pub fn attribute(name: &str) -> Option<&'static AttributeSchema> {
    MAINTENANCE_WINDOW_SCHEMA.iter().find(|attr| attr.name == name)
}
