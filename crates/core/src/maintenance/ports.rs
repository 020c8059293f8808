//! Port interface to the external monitoring system
//!
//! This trait defines the boundary between lifecycle logic and whatever
//! transport reaches the monitoring system.

use async_trait::async_trait;
use quiesce_domain::{MaintenanceWindow, Result};

/// Maintenance-window operations of the monitoring system.
///
/// A "not found" outcome must surface as `QuiesceError::NotFound` so the
/// read path can tell an externally deleted window from a real failure.
#[async_trait]
pub trait MaintenanceClient: Send + Sync {
    /// Create a window, returning the canonical object with its generated id
    async fn create_maintenance_window(
        &self,
        window: &MaintenanceWindow,
    ) -> Result<MaintenanceWindow>;

    /// Fetch a window by identifier
    async fn get_maintenance_window(&self, id: i64) -> Result<MaintenanceWindow>;

    /// Replace an existing window
    async fn update_maintenance_window(&self, window: &MaintenanceWindow) -> Result<()>;

    /// Delete a window by identifier
    async fn delete_maintenance_window(&self, id: i64) -> Result<()>;
}
