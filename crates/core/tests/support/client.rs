use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use quiesce_core::MaintenanceClient;
use quiesce_domain::{MaintenanceWindow, QuiesceError, Result, Timeslot};

/// In-memory stand-in for the monitoring system.
///
/// Stores windows by identifier, assigns identifiers on create, and fills in
/// a minimal imitation of the server-computed fields so the read-path guards
/// have realistic input. Every call is counted so tests can assert "zero
/// external calls happened".
#[derive(Default)]
pub struct InMemoryMaintenanceClient {
    windows: Mutex<HashMap<i64, MaintenanceWindow>>,
    next_id: AtomicI64,
    calls: AtomicUsize,
    fail_next: Mutex<Option<QuiesceError>>,
}

impl InMemoryMaintenanceClient {
    pub fn new() -> Self {
        Self { next_id: AtomicI64::new(1), ..Self::default() }
    }

    /// Queue an error to be returned by the next call, whatever it is.
    pub fn fail_next(&self, err: QuiesceError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    /// Total number of calls the service has issued so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Raw stored object, for asserting what the service actually sent.
    pub fn stored(&self, id: i64) -> Option<MaintenanceWindow> {
        self.windows.lock().unwrap().get(&id).cloned()
    }

    fn record_call(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_next.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Minimal stand-in for the scheduling math the real system performs.
    fn compute_derived(window: &mut MaintenanceWindow) {
        window.status = if window.active { "scheduled" } else { "inactive" }.to_string();
        window.timezone = if window.timezone_option.is_empty() {
            "UTC".to_string()
        } else {
            window.timezone_option.clone()
        };
        window.timezone_offset = "+00:00".to_string();
        window.timeslots = match window.date_range.complete() {
            Some((start, end)) => vec![Timeslot { start_date: start, end_date: end }],
            None => vec![],
        };
    }

    fn missing(id: i64) -> QuiesceError {
        QuiesceError::NotFound(format!("maintenance window {}", id))
    }
}

#[async_trait]
impl MaintenanceClient for InMemoryMaintenanceClient {
    async fn create_maintenance_window(
        &self,
        window: &MaintenanceWindow,
    ) -> Result<MaintenanceWindow> {
        self.record_call()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut stored = window.clone();
        stored.id = Some(id);
        Self::compute_derived(&mut stored);
        self.windows.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_maintenance_window(&self, id: i64) -> Result<MaintenanceWindow> {
        self.record_call()?;
        self.windows.lock().unwrap().get(&id).cloned().ok_or_else(|| Self::missing(id))
    }

    async fn update_maintenance_window(&self, window: &MaintenanceWindow) -> Result<()> {
        self.record_call()?;
        let id = window
            .id
            .ok_or_else(|| QuiesceError::InvalidInput("update without identifier".to_string()))?;
        let mut windows = self.windows.lock().unwrap();
        if !windows.contains_key(&id) {
            return Err(Self::missing(id));
        }
        let mut stored = window.clone();
        Self::compute_derived(&mut stored);
        windows.insert(id, stored);
        Ok(())
    }

    async fn delete_maintenance_window(&self, id: i64) -> Result<()> {
        self.record_call()?;
        match self.windows.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(Self::missing(id)),
        }
    }
}
