//! # Quiesce API
//!
//! Surface exposed to the hosting configuration-management layer:
//! the typed attribute schema of the maintenance-window resource and thin
//! handlers over the lifecycle service.
//!
//! The host protocol itself (plugin wiring, session setup) lives with the
//! host; this crate only provides what it calls into.

pub mod handlers;
pub mod schema;

pub use handlers::{
    create_maintenance_window, delete_maintenance_window, import_maintenance_window,
    read_maintenance_window, update_maintenance_window, validate_maintenance_window, HostContext,
};
pub use schema::{attribute, AttributeMode, AttributeSchema, MAINTENANCE_WINDOW_SCHEMA};
