//! Lifecycle tests driving the service through the in-memory client

mod support;

use std::sync::Arc;

use chrono_tz::Tz;
use quiesce_core::{MaintenanceConfig, MaintenanceService, TimeOfDayConfig};
use quiesce_domain::{MaintenanceStatus, MaintenanceStrategy, QuiesceError};
use tokio_util::sync::CancellationToken;

use support::InMemoryMaintenanceClient;

fn harness() -> (Arc<InMemoryMaintenanceClient>, MaintenanceService) {
    let client = Arc::new(InMemoryMaintenanceClient::new());
    let service = MaintenanceService::new(client.clone());
    (client, service)
}

fn single_config() -> MaintenanceConfig {
    MaintenanceConfig {
        title: "storage firmware rollout".to_string(),
        description: "rack 4 only".to_string(),
        strategy: MaintenanceStrategy::Single,
        start_date: Some("2025-01-01T00:00:00Z".to_string()),
        end_date: Some("2025-01-02T00:00:00Z".to_string()),
        ..MaintenanceConfig::default()
    }
}

fn cron_config() -> MaintenanceConfig {
    MaintenanceConfig {
        title: "nightly reindex".to_string(),
        strategy: MaintenanceStrategy::Cron,
        cron: Some("0 2 * * *".to_string()),
        duration_minutes: Some(30),
        ..MaintenanceConfig::default()
    }
}

#[tokio::test]
async fn create_assigns_identifier_and_rehydrates_computed_fields() {
    let (client, service) = harness();
    let cancel = CancellationToken::new();

    let created = service.create(&single_config(), &cancel).await.unwrap();
    assert_eq!(created.id, Some(1));
    assert_eq!(created.status, Some(MaintenanceStatus::Scheduled));
    assert_eq!(created.timezone.as_deref(), Some("UTC"));
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn single_round_trips_to_identical_strings() {
    let (_, service) = harness();
    let cancel = CancellationToken::new();

    let created = service.create(&single_config(), &cancel).await.unwrap();
    assert_eq!(created.start_date.as_deref(), Some("2025-01-01T00:00:00Z"));
    assert_eq!(created.end_date.as_deref(), Some("2025-01-02T00:00:00Z"));
}

#[tokio::test]
async fn weekday_round_trips_list_and_time_pair_in_order() {
    let (_, service) = harness();
    let cancel = CancellationToken::new();
    let config = MaintenanceConfig {
        title: "weekly cert rotation".to_string(),
        strategy: MaintenanceStrategy::RecurringWeekday,
        weekdays: Some(vec![1, 3, 5]),
        start_time: Some(TimeOfDayConfig { hours: 9, minutes: 0, seconds: 0 }),
        end_time: Some(TimeOfDayConfig { hours: 17, minutes: 0, seconds: 0 }),
        timezone_option: Some(Tz::Europe__Berlin.name().to_string()),
        ..MaintenanceConfig::default()
    };

    let created = service.create(&config, &cancel).await.unwrap();
    assert_eq!(created.weekdays, Some(vec![1, 3, 5]));
    assert_eq!(created.start_time, Some(TimeOfDayConfig { hours: 9, minutes: 0, seconds: 0 }));
    assert_eq!(created.end_time, Some(TimeOfDayConfig { hours: 17, minutes: 0, seconds: 0 }));
    // The resolved timezone flows back as a computed field
    assert_eq!(created.timezone.as_deref(), Some("Europe/Berlin"));
}

#[tokio::test]
async fn day_of_month_round_trips_canonical_strings() {
    let (_, service) = harness();
    let cancel = CancellationToken::new();
    let config = MaintenanceConfig {
        title: "monthly billing freeze".to_string(),
        strategy: MaintenanceStrategy::RecurringDayOfMonth,
        days_of_month: Some(vec!["15".to_string(), "lastDay1".to_string()]),
        start_time: Some(TimeOfDayConfig { hours: 0, minutes: 0, seconds: 0 }),
        end_time: Some(TimeOfDayConfig { hours: 2, minutes: 0, seconds: 0 }),
        ..MaintenanceConfig::default()
    };

    let created = service.create(&config, &cancel).await.unwrap();
    assert_eq!(created.days_of_month, Some(vec!["15".to_string(), "lastDay1".to_string()]));
}

#[tokio::test]
async fn switching_cron_to_manual_clears_stale_schedule_fields() {
    let (client, service) = harness();
    let cancel = CancellationToken::new();

    let created = service.create(&cron_config(), &cancel).await.unwrap();
    assert_eq!(created.duration_minutes, Some(30));
    let id = created.id.unwrap();

    let switched = MaintenanceConfig {
        id: Some(id),
        title: created.title.clone(),
        strategy: MaintenanceStrategy::Manual,
        ..MaintenanceConfig::default()
    };
    let updated = service.update(&switched, &cancel).await.unwrap();
    assert_eq!(updated.duration_minutes, None);
    assert_eq!(updated.cron, None);

    // And the same holds for a fresh read of the stored object
    let read = service.read(id, &cancel).await.unwrap().unwrap();
    assert_eq!(read.duration_minutes, None);
    assert_eq!(read.cron, None);
    assert_eq!(read.strategy, MaintenanceStrategy::Manual);

    let stored = client.stored(id).unwrap();
    assert_eq!(stored.duration, 0);
    assert!(stored.cron.is_empty());
}

#[tokio::test]
async fn update_refetches_instead_of_trusting_its_own_response() {
    let (client, service) = harness();
    let cancel = CancellationToken::new();

    let created = service.create(&cron_config(), &cancel).await.unwrap();
    let calls_after_create = client.call_count();

    let mut changed = cron_config();
    changed.id = created.id;
    changed.duration_minutes = Some(45);
    let updated = service.update(&changed, &cancel).await.unwrap();

    // One update call plus one re-fetch
    assert_eq!(client.call_count(), calls_after_create + 2);
    assert_eq!(updated.duration_minutes, Some(45));
    // The re-fetched object carries the recomputed status
    assert_eq!(updated.status, Some(MaintenanceStatus::Scheduled));
}

#[tokio::test]
async fn timeslots_are_always_present_after_a_read() {
    let (_, service) = harness();
    let cancel = CancellationToken::new();

    for config in [single_config(), cron_config()] {
        let created = service.create(&config, &cancel).await.unwrap();
        let read = service.read(created.id.unwrap(), &cancel).await.unwrap().unwrap();
        let slots = read.timeslots.expect("timeslots must be present after a read");
        if config.strategy == MaintenanceStrategy::Single {
            assert_eq!(slots.len(), 1);
            assert_eq!(slots[0].start_date, "2025-01-01T00:00:00Z");
        } else {
            assert!(slots.is_empty());
        }
    }
}

#[tokio::test]
async fn reading_a_vanished_window_signals_local_removal_without_error() {
    let (client, service) = harness();
    let cancel = CancellationToken::new();

    let removed = service.read(404, &cancel).await.unwrap();
    assert_eq!(removed, None);
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn malformed_single_start_date_aborts_before_any_external_call() {
    let (client, service) = harness();
    let cancel = CancellationToken::new();
    let mut config = single_config();
    config.start_date = Some("not-a-date".to_string());

    let err = service.create(&config, &cancel).await.unwrap_err();
    assert!(matches!(err, QuiesceError::Parse(_)));
    assert_eq!(client.call_count(), 0);

    // Same guarantee on the update path
    config.id = Some(1);
    let err = service.update(&config, &cancel).await.unwrap_err();
    assert!(matches!(err, QuiesceError::Parse(_)));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn validation_failures_block_the_network_and_accumulate() {
    let (client, service) = harness();
    let cancel = CancellationToken::new();
    let config = MaintenanceConfig {
        title: "incomplete".to_string(),
        strategy: MaintenanceStrategy::RecurringWeekday,
        ..MaintenanceConfig::default()
    };

    let err = service.create(&config, &cancel).await.unwrap_err();
    match err {
        QuiesceError::Validation(failures) => {
            assert_eq!(failures.len(), 3);
            assert!(failures.iter().any(|failure| failure.contains("weekdays")));
            assert!(failures.iter().any(|failure| failure.contains("start_time")));
            assert!(failures.iter().any(|failure| failure.contains("end_time")));
        }
        other => panic!("expected Validation, got {:?}", other),
    }
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn update_without_identifier_is_invalid_input() {
    let (client, service) = harness();
    let cancel = CancellationToken::new();

    let err = service.update(&cron_config(), &cancel).await.unwrap_err();
    assert!(matches!(err, QuiesceError::InvalidInput(_)));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn updating_a_vanished_window_is_fatal() {
    let (_, service) = harness();
    let cancel = CancellationToken::new();
    let mut config = cron_config();
    config.id = Some(404);

    let err = service.update(&config, &cancel).await.unwrap_err();
    assert!(matches!(err, QuiesceError::NotFound(_)));
}

#[tokio::test]
async fn delete_removes_the_window_and_not_found_is_fatal() {
    let (client, service) = harness();
    let cancel = CancellationToken::new();

    let created = service.create(&cron_config(), &cancel).await.unwrap();
    let id = created.id.unwrap();
    service.delete(id, &cancel).await.unwrap();
    assert_eq!(client.stored(id), None);

    let err = service.delete(id, &cancel).await.unwrap_err();
    assert!(matches!(err, QuiesceError::NotFound(_)));
}

#[tokio::test]
async fn transport_failures_surface_their_message_verbatim() {
    let (client, service) = harness();
    let cancel = CancellationToken::new();
    client.fail_next(QuiesceError::Transport("connection reset by peer".to_string()));

    let err = service.create(&cron_config(), &cancel).await.unwrap_err();
    assert!(matches!(err, QuiesceError::Transport(message) if message == "connection reset by peer"));
}

#[tokio::test]
async fn a_cancelled_token_stops_every_operation_before_the_call() {
    let (client, service) = harness();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = service.create(&cron_config(), &cancel).await.unwrap_err();
    assert!(matches!(err, QuiesceError::Cancelled));
    let err = service.read(1, &cancel).await.unwrap_err();
    assert!(matches!(err, QuiesceError::Cancelled));
    let err = service.delete(1, &cancel).await.unwrap_err();
    assert!(matches!(err, QuiesceError::Cancelled));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn import_then_read_completes_the_picture() {
    let (_, service) = harness();
    let cancel = CancellationToken::new();

    let created = service.create(&single_config(), &cancel).await.unwrap();
    let id = created.id.unwrap();

    let imported = MaintenanceService::import(&id.to_string()).unwrap();
    assert_eq!(imported.id, Some(id));
    assert!(imported.title.is_empty());

    let read = service.read(imported.id.unwrap(), &cancel).await.unwrap().unwrap();
    assert_eq!(read.title, "storage firmware rollout");
    assert_eq!(read.start_date.as_deref(), Some("2025-01-01T00:00:00Z"));
}
