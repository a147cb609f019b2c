mod common;

use std::{cell::Cell, rc::Rc};

use common::{create_test_store, driveway, hundred_meter_path, open_store};
use groundwork_core::{
    storage::{SqliteStorage, Storage},
    DispatchError, Job, JobAction, JobFeed, JobPatch, JobStatus, JobStoreBuilder, Lifecycle,
    RequestDraft, ServiceType,
};
use serde_json::Value;
use tempfile::TempDir;

fn submit(store: &groundwork_core::JobStore, service: ServiceType) -> Job {
    let mut draft = RequestDraft::new(service);
    draft.set_geometry(driveway());
    draft.set_address("1 Dundas St");
    draft.submit(store).expect("Failed to submit request")
}

#[test]
fn test_create_then_list_round_trip() {
    let (_temp_dir, store) = create_test_store();

    let job = submit(&store, ServiceType::Snow);
    let jobs = store.list_all().expect("Failed to list jobs");

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0], job);
}

#[test]
fn test_jobs_persist_across_store_instances() {
    let (temp_dir, store) = create_test_store();
    let older = submit(&store, ServiceType::Lawn);
    let newer = submit(&store, ServiceType::Leaves);
    drop(store);

    let reopened = open_store(&temp_dir);
    let jobs = reopened.list_all().expect("Failed to list jobs");
    assert_eq!(jobs, vec![newer, older]);
}

#[test]
fn test_update_leaves_other_fields_byte_identical() {
    let (temp_dir, store) = create_test_store();
    let job = submit(&store, ServiceType::Salt);

    let raw = SqliteStorage::new(temp_dir.path().join("test.db")).expect("Failed to open raw");
    let read_record = || -> Value {
        let blob = raw
            .get_item(store.key())
            .expect("Failed to read")
            .expect("Blob should exist");
        let records: Value = serde_json::from_str(&blob).expect("Valid JSON");
        records[0].clone()
    };

    let before = read_record();
    store
        .update(&job.id, &JobPatch::status(JobStatus::Assigned))
        .expect("Failed to update");
    let after = read_record();

    let before = before.as_object().unwrap();
    let after = after.as_object().unwrap();
    assert_eq!(before.len(), after.len());
    for (key, value) in before {
        if key == "status" {
            assert_eq!(value, "open");
            assert_eq!(after[key], "assigned");
        } else {
            assert_eq!(
                serde_json::to_string(value).unwrap(),
                serde_json::to_string(&after[key]).unwrap(),
                "field {key} changed"
            );
        }
    }
}

#[test]
fn test_update_keeps_foreign_encoding_of_untouched_fields() {
    let (temp_dir, store) = create_test_store();
    let raw = SqliteStorage::new(temp_dir.path().join("test.db")).expect("Failed to open raw");

    let record = r#"{"id":"m3k9x2abc","createdAt":"2024-11-02T15:04:05.000Z","service":"snow","address":"","areaM2":500,"areaFt2":5382,"edgeM":0,"edgeFt":0,"price":35,"status":"open","geometry":{"type":"FeatureCollection","features":[]}}"#;
    let other = r#"{"id":"older","createdAt":"2024-10-30T09:00:00.000Z","service":"lawn","address":"4 King St","areaM2":10,"areaFt2":108,"edgeM":0,"edgeFt":0,"price":20,"status":"completed","geometry":{"type":"FeatureCollection","features":[]}}"#;
    raw.set_item(store.key(), &format!("[{record},{other}]"))
        .expect("Failed to seed");

    let job = Lifecycle::perform(&store, "m3k9x2abc", JobAction::Accept)
        .expect("Failed to accept")
        .expect("Job should exist");
    assert_eq!(job.status, JobStatus::Assigned);
    assert_eq!(job.quote.price, 35.0);

    let blob = raw
        .get_item(store.key())
        .expect("Failed to read")
        .expect("Blob should exist");
    let expected = format!(
        "[{},{other}]",
        record.replace(r#""status":"open""#, r#""status":"assigned""#)
    );
    assert_eq!(blob, expected);
}

#[test]
fn test_second_instance_observes_writes_immediately() {
    let (temp_dir, customer) = create_test_store();
    let contractor = open_store(&temp_dir);

    let job = submit(&customer, ServiceType::Snow);
    Lifecycle::perform(&contractor, &job.id, JobAction::Accept).expect("Failed to accept");

    let seen = customer.get(&job.id).unwrap().expect("Job should exist");
    assert_eq!(seen.status, JobStatus::Assigned);
}

#[test]
fn test_stale_write_loses_concurrent_update() {
    let (temp_dir, tab_a) = create_test_store();
    let tab_b = open_store(&temp_dir);
    let job = submit(&tab_a, ServiceType::Lawn);

    let stale = tab_b.list_all().unwrap();
    Lifecycle::perform(&tab_a, &job.id, JobAction::Accept).unwrap();

    // tab_b writes back what it read before tab_a's update: last write wins.
    tab_b.save(&stale).unwrap();
    assert_eq!(
        tab_a.get(&job.id).unwrap().unwrap().status,
        JobStatus::Open
    );
}

#[test]
fn test_corrupt_blob_reads_as_empty_and_recovers() {
    let (temp_dir, store) = create_test_store();
    let raw = SqliteStorage::new(temp_dir.path().join("test.db")).unwrap();
    raw.set_item(store.key(), "{ definitely not an array").unwrap();

    assert!(store.list_all().unwrap().is_empty());

    let job = submit(&store, ServiceType::Snow);
    assert_eq!(store.list_all().unwrap(), vec![job]);
}

#[test]
fn test_quota_failure_surfaces_and_keeps_draft() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JobStoreBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_quota_bytes(Some(128))
        .build()
        .unwrap();

    let mut draft = RequestDraft::new(ServiceType::Snow);
    draft.set_geometry(driveway());

    let err = draft.submit(&store).unwrap_err();
    assert!(matches!(err, DispatchError::StorageWrite { .. }));
    assert!(err.is_environmental());
    assert!(draft.quote().unwrap().is_some());
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_invalid_transition_leaves_status_unchanged() {
    let (_temp_dir, store) = create_test_store();
    let job = submit(&store, ServiceType::Salt);

    let err = Lifecycle::apply(&store, &job.id, JobStatus::InProgress).unwrap_err();
    assert!(matches!(err, DispatchError::InvalidTransition { .. }));
    assert_eq!(store.get(&job.id).unwrap().unwrap().status, JobStatus::Open);
}

#[test]
fn test_contractor_feed_tracks_customer_submissions() {
    let store = Rc::new(JobStoreBuilder::new().in_memory().build().unwrap());
    let contractor = JobFeed::attach(&store).unwrap();
    let signals = Rc::new(Cell::new(0));
    let _counter = {
        let signals = Rc::clone(&signals);
        store.subscribe(move || signals.set(signals.get() + 1))
    };

    let mut draft = RequestDraft::new(ServiceType::Salt);
    draft.set_geometry(hundred_meter_path());
    let job = draft.submit(&store).unwrap();

    assert_eq!(contractor.board().group(JobStatus::Open), &[job.clone()]);

    for action in [JobAction::Accept, JobAction::Start, JobAction::Complete] {
        Lifecycle::perform(&store, &job.id, action).unwrap();
    }
    let board = contractor.board();
    assert_eq!(board.group(JobStatus::Completed).len(), 1);
    assert!(board.group(JobStatus::Open).is_empty());
    assert_eq!(signals.get(), 4);
}

#[test]
fn test_clear_removes_everything() {
    let (_temp_dir, store) = create_test_store();
    submit(&store, ServiceType::Snow);
    submit(&store, ServiceType::Lawn);

    store.clear().unwrap();
    assert!(store.list_all().unwrap().is_empty());
}
