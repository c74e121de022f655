//! End-to-end checks of the dataset pipeline: generate the reference
//! dataset, export it to disk, read it back, and normalize it.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;
use std::fs;

use alertgen_core::generator::{DEFAULT_ALERT_COUNT, MAX_AGE_DAYS, MAX_AGE_EXTRA_HOURS};
use alertgen_core::{AlertStore, Table, export_csv, generate, read_csv};
use alertgen_types::{AlertId, AlertStatus};
use chrono::{TimeDelta, Utc};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn reference_dataset() -> AlertStore {
    generate(DEFAULT_ALERT_COUNT, &mut rand::rng())
}

#[test]
fn reference_dataset_holds_200_unique_valid_alerts() {
    let before = Utc::now();
    let store = reference_dataset();

    assert_eq!(store.len(), 200);
    let ids: HashSet<AlertId> = store.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), 200);

    let max_age = TimeDelta::days(MAX_AGE_DAYS) + TimeDelta::hours(MAX_AGE_EXTRA_HOURS);
    for alert in &store {
        alert.validate().unwrap();
        assert!(alert.created_at <= Utc::now());
        // Truncation to whole seconds can push a timestamp up to one second
        // before the reference instant.
        assert!(before.signed_duration_since(alert.created_at) <= max_age + TimeDelta::seconds(1));
        assert_eq!(alert.status == AlertStatus::Completed, alert.is_resolved());
    }
}

#[test]
fn csv_export_round_trips_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("alerts.csv");
    let store = reference_dataset();

    let rows = export_csv(&store, &path).unwrap();
    assert_eq!(rows, 200);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 201);

    let back = read_csv(&path).unwrap();
    assert_eq!(back.as_slice(), store.as_slice());
}

#[test]
fn export_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("alerts.csv");
    fs::write(&path, "stale contents\nthat should disappear\n".repeat(500)).unwrap();

    let store = generate(3, &mut rand::rng());
    export_csv(&store, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(!text.contains("stale"));
}

#[test]
fn normalized_table_matches_store() {
    let store = reference_dataset();
    let table = Table::from_alerts(&store);

    assert_eq!(table.row_count(), 200);
    let ids = table.column("alert_id").unwrap();
    let expected: Vec<String> = store.iter().map(|a| a.id.to_string()).collect();
    let actual: Vec<String> = ids.iter().map(ToString::to_string).collect();
    assert_eq!(actual, expected);

    let resolved = store.iter().filter(|a| a.is_resolved()).count();
    let missing = table
        .column("resolutation_datetime")
        .unwrap()
        .iter()
        .filter(|c| c.is_missing())
        .count();
    assert_eq!(missing, 200 - resolved);
}
