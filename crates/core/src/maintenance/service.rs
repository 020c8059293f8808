//! Maintenance-window lifecycle service
//!
//! Sequences validation, mapping, and the external client calls. Holds no
//! state beyond the injected client handle; every operation either completes
//! fully or stops before any further mutation.

use std::future::Future;
use std::sync::Arc;

use quiesce_domain::{QuiesceError, Result};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use super::config::MaintenanceConfig;
use super::from_domain::domain_to_config;
use super::ports::MaintenanceClient;
use super::to_domain::config_to_domain;
use super::validation::validate_config;

/// Lifecycle operations over maintenance windows
pub struct MaintenanceService {
    client: Arc<dyn MaintenanceClient>,
}

impl MaintenanceService {
    /// Create a new service around a monitoring-system client
    pub fn new(client: Arc<dyn MaintenanceClient>) -> Self {
        Self { client }
    }

    /// Validate, map, and create the window upstream, returning the
    /// configuration rehydrated from the created object (including its
    /// generated identifier).
    #[instrument(skip(self, config, cancel), fields(title = %config.title))]
    pub async fn create(
        &self,
        config: &MaintenanceConfig,
        cancel: &CancellationToken,
    ) -> Result<MaintenanceConfig> {
        ensure_valid(config)?;
        let window = config_to_domain(config)?;
        let created = guarded(cancel, self.client.create_maintenance_window(&window)).await?;
        info!(id = ?created.id, "Maintenance window created");
        Ok(domain_to_config(&created))
    }

    /// Fetch the window by identifier.
    ///
    /// Returns `Ok(None)` when the monitoring system no longer knows the
    /// identifier: the window was deleted externally and the caller should
    /// drop its local record. This is an expected condition, not a failure.
    #[instrument(skip(self, cancel))]
    pub async fn read(
        &self,
        id: i64,
        cancel: &CancellationToken,
    ) -> Result<Option<MaintenanceConfig>> {
        match guarded(cancel, self.client.get_maintenance_window(id)).await {
            Ok(window) => Ok(Some(domain_to_config(&window))),
            Err(QuiesceError::NotFound(_)) => {
                warn!(id, "Maintenance window vanished upstream, removing locally");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Validate, map (carrying the existing identifier), update upstream,
    /// then re-fetch the object by identifier.
    ///
    /// The re-fetch costs one extra round trip but guarantees the computed
    /// fields reflect any server-side normalization of the mutation.
    #[instrument(skip(self, config, cancel), fields(id = ?config.id))]
    pub async fn update(
        &self,
        config: &MaintenanceConfig,
        cancel: &CancellationToken,
    ) -> Result<MaintenanceConfig> {
        let id = config.id.ok_or_else(|| {
            QuiesceError::InvalidInput(
                "cannot update a maintenance window without an identifier".to_string(),
            )
        })?;
        ensure_valid(config)?;
        let window = config_to_domain(config)?;
        guarded(cancel, self.client.update_maintenance_window(&window)).await?;
        let refreshed = guarded(cancel, self.client.get_maintenance_window(id)).await?;
        info!(id, "Maintenance window updated");
        Ok(domain_to_config(&refreshed))
    }

    /// Delete the window upstream. Any failure, including NotFound, is fatal.
    #[instrument(skip(self, cancel))]
    pub async fn delete(&self, id: i64, cancel: &CancellationToken) -> Result<()> {
        guarded(cancel, self.client.delete_maintenance_window(id)).await?;
        info!(id, "Maintenance window deleted");
        Ok(())
    }

    /// Seed a configuration from an externally supplied identifier.
    ///
    /// Only the identifier is populated; everything else is deferred to a
    /// subsequent read.
    ///
    /// # Errors
    ///
    /// `QuiesceError::InvalidInput` when the identifier is not decimal.
    pub fn import(id: &str) -> Result<MaintenanceConfig> {
        let id = id.trim().parse::<i64>().map_err(|_| {
            QuiesceError::InvalidInput(format!(
                "maintenance window id must be numeric, got '{}'",
                id
            ))
        })?;
        Ok(MaintenanceConfig { id: Some(id), ..MaintenanceConfig::default() })
    }
}

/// Race a client call against the externally supplied cancellation signal.
/// On cancellation nothing local has been mutated yet, so the operation
/// fails cleanly with no partial effect.
async fn guarded<T>(
    cancel: &CancellationToken,
    call: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(QuiesceError::Cancelled),
        result = call => result,
    }
}

fn ensure_valid(config: &MaintenanceConfig) -> Result<()> {
    let failures = validate_config(config);
    if failures.is_empty() {
        Ok(())
    } else {
        Err(QuiesceError::Validation(
            failures.iter().map(ToString::to_string).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use quiesce_domain::MaintenanceStrategy;

    use super::*;

    #[test]
    fn import_seeds_only_the_identifier() {
        let config = MaintenanceService::import("12").unwrap();
        assert_eq!(config.id, Some(12));
        assert_eq!(config.strategy, MaintenanceStrategy::Manual);
        assert!(config.title.is_empty());
        assert_eq!(config.timeslots, None);
    }

    #[test]
    fn import_tolerates_surrounding_whitespace() {
        assert_eq!(MaintenanceService::import(" 7 ").unwrap().id, Some(7));
    }

    #[test]
    fn import_rejects_non_numeric_identifiers() {
        let err = MaintenanceService::import("twelve").unwrap_err();
        assert!(matches!(err, QuiesceError::InvalidInput(message) if message.contains("twelve")));
    }
}
