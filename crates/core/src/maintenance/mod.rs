//! Maintenance-window lifecycle logic
//!
//! Validation, bidirectional mapping between the flat configuration and the
//! monitoring system's canonical object, and the orchestrating service.

pub mod config;
pub mod from_domain;
pub mod ports;
pub mod service;
pub mod to_domain;
pub mod validation;
