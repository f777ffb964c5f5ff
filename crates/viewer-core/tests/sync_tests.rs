// Host-side tests for the sync channel, document layout and stores.

use std::rc::Rc;

use futures::executor::{block_on, LocalPool};
use glam::Vec3;
use serde_json::json;
use viewer_core::{
    FileStore, FixedClock, MemoryStore, ModelStore, PersistedRecord, RotationParameter,
    StoreError, SyncChannel, SyncError,
};

fn channel(store: Rc<MemoryStore>) -> SyncChannel {
    let pool = LocalPool::new();
    SyncChannel::new(store, Rc::new(pool.spawner()), Rc::new(FixedClock::new(42)))
}

#[test]
fn record_serializes_with_document_field_names() {
    let record = PersistedRecord::new(Vec3::new(1.0, 0.0, -2.5), RotationParameter::new(75.0), 99);
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "position": { "x": 1.0, "y": 0.0, "z": -2.5 },
            "rotation": 75.0,
            "updatedAt": 99
        })
    );
}

#[test]
fn load_reports_not_found_as_none() {
    let store = Rc::new(MemoryStore::new());
    let sync = channel(store);
    assert!(block_on(sync.load("model1")).unwrap().is_none());
}

#[test]
fn save_then_load_round_trips_through_store() {
    let store = Rc::new(MemoryStore::new());
    let sync = channel(store.clone());
    let record = block_on(sync.save(
        "model2",
        Vec3::new(2.0, 0.0, 3.0),
        RotationParameter::new(12.0),
    ))
    .unwrap();
    assert_eq!(record.updated_at, 42);

    let doc = block_on(sync.load("model2")).unwrap().unwrap();
    assert_eq!(doc.position(), Some(Vec3::new(2.0, 0.0, 3.0)));
    assert_eq!(doc.rotation(), Some(RotationParameter::new(12.0)));
    assert_eq!(doc.updated_at(), Some(42));
}

#[test]
fn store_failures_map_to_sync_errors() {
    let store = Rc::new(MemoryStore::new());
    store.set_fail_loads(true);
    store.set_fail_saves(true);
    let sync = channel(store);

    let err = block_on(sync.load("model1")).unwrap_err();
    assert!(matches!(err, SyncError::LoadFailure { .. }));
    assert_eq!(err.to_string(), "Failed to load model model1");
    assert_eq!(err.id(), "model1");

    let err = block_on(sync.save("model1", Vec3::ZERO, RotationParameter::default())).unwrap_err();
    assert!(matches!(err, SyncError::SaveFailure { .. }));
    assert_eq!(err.to_string(), "Failed to save model model1");
}

#[test]
fn every_save_writes_a_complete_snapshot() {
    let store = Rc::new(MemoryStore::new());
    let sync = channel(store.clone());
    block_on(sync.save("model1", Vec3::new(1.0, 0.0, 1.0), RotationParameter::new(5.0))).unwrap();
    block_on(sync.save("model1", Vec3::new(1.0, 0.0, 1.0), RotationParameter::new(6.0))).unwrap();
    let raw = store.raw("model1").unwrap();
    assert!(raw.get("position").is_some());
    assert_eq!(raw["rotation"], json!(6.0));
    assert!(raw.get("updatedAt").is_some());
}

#[test]
fn rotation_parameter_maps_to_full_turn() {
    let half = RotationParameter::new(50.0);
    assert!((half.radians() - std::f32::consts::PI).abs() < 1e-6);

    let full = RotationParameter::new(100.0);
    assert!((full.radians() - std::f32::consts::TAU).abs() < 1e-6);
    let turned = full.quat() * Vec3::X;
    assert!((turned - Vec3::X).length() < 1e-5, "full turn gave {turned:?}");

    assert_eq!(RotationParameter::new(250.0).value(), 100.0);
    assert_eq!(RotationParameter::new(-3.0).value(), 0.0);
    assert_eq!(RotationParameter::new(f32::NAN).value(), 0.0);
}

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    assert!(block_on(store.get("model1")).unwrap().is_none());

    let record = PersistedRecord::new(Vec3::new(-4.3, 0.0, 0.5), RotationParameter::new(33.0), 5);
    block_on(store.put("model1", &record)).unwrap();

    let path = dir.path().join("models").join("model1.json");
    assert!(path.exists());
    let doc = block_on(store.get("model1")).unwrap().unwrap();
    assert_eq!(doc.position(), Some(Vec3::new(-4.3, 0.0, 0.5)));
    assert_eq!(doc.rotation().map(RotationParameter::value), Some(33.0));
}

#[test]
fn file_store_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let err = block_on(store.get("../escape")).unwrap_err();
    assert!(matches!(err, StoreError::InvalidKey(_)));
    assert!(store.document_path("").is_err());
    assert!(store.document_path("model-1_b").is_ok());
}

#[test]
fn file_store_reports_malformed_documents() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let path = store.document_path("model1").unwrap();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();
    let err = block_on(store.get("model1")).unwrap_err();
    assert!(matches!(err, StoreError::Malformed(_)));
}

#[test]
fn non_finite_position_fails_the_load_with_its_cause() {
    let store = Rc::new(MemoryStore::new());
    store.insert_raw(
        "model1",
        json!({"position": {"x": 0.0, "y": 0.0, "z": -1e40}, "rotation": 5}),
    );
    let sync = channel(store);

    let err = block_on(sync.load("model1")).unwrap_err();
    assert!(matches!(err, SyncError::LoadFailure { .. }));
    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(source.to_string(), "field 'position' is out of range");
}

#[test]
fn memory_store_insert_seeds_a_readable_record() {
    let store = MemoryStore::new();
    let record = PersistedRecord::new(Vec3::new(2.0, 0.0, 1.0), RotationParameter::new(40.0), 3);
    store.insert("model2", &record).unwrap();
    assert_eq!(store.record("model2"), Some(record));
    assert!(store.writes().is_empty());
}
