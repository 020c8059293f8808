//! Lifecycle handlers called by the configuration-management host

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use quiesce_core::{
    validate_config, MaintenanceClient, MaintenanceConfig, MaintenanceService, ValidationFailure,
};
use quiesce_domain::Result;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Shared context the host constructs once and passes to every handler
pub struct HostContext {
    maintenance: MaintenanceService,
}

impl HostContext {
    /// Build the context around an injected monitoring-system client
    pub fn new(client: Arc<dyn MaintenanceClient>) -> Self {
        Self { maintenance: MaintenanceService::new(client) }
    }
}

/// Validate and create a maintenance window
pub async fn create_maintenance_window(
    ctx: &HostContext,
    config: &MaintenanceConfig,
    cancel: &CancellationToken,
) -> Result<MaintenanceConfig> {
    run("maintenance::create", ctx.maintenance.create(config, cancel)).await
}

/// Fetch a maintenance window; `None` means it is gone upstream and the host
/// should drop its local record
pub async fn read_maintenance_window(
    ctx: &HostContext,
    id: i64,
    cancel: &CancellationToken,
) -> Result<Option<MaintenanceConfig>> {
    run("maintenance::read", ctx.maintenance.read(id, cancel)).await
}

/// Validate and update a maintenance window, returning the re-fetched state
pub async fn update_maintenance_window(
    ctx: &HostContext,
    config: &MaintenanceConfig,
    cancel: &CancellationToken,
) -> Result<MaintenanceConfig> {
    run("maintenance::update", ctx.maintenance.update(config, cancel)).await
}

/// Delete a maintenance window
pub async fn delete_maintenance_window(
    ctx: &HostContext,
    id: i64,
    cancel: &CancellationToken,
) -> Result<()> {
    run("maintenance::delete", ctx.maintenance.delete(id, cancel)).await
}

/// Seed a configuration from an externally supplied identifier
pub fn import_maintenance_window(id: &str) -> Result<MaintenanceConfig> {
    MaintenanceService::import(id)
}

/// Pre-flight validation the host runs before any mutating operation
pub fn validate_maintenance_window(config: &MaintenanceConfig) -> Vec<ValidationFailure> {
    validate_config(config)
}

async fn run<T>(operation: &'static str, call: impl Future<Output = Result<T>>) -> Result<T> {
    let start = Instant::now();
    let result = call.await;
    info!(
        operation,
        elapsed = ?start.elapsed(),
        success = result.is_ok(),
        "Maintenance command finished"
    );
    result
}
