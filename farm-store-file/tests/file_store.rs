//! Integration tests for the file-backed draft store.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use farm_core::models::{Draft, FertilizerApplication, IrrigationEntry, Season};
use farm_core::store::{DraftStore, StoreConfig, StoreFactory, StoreRegistry};
use farm_store_file::{DRAFT_FILE_NAME, FileStore, FileStoreFactory};

fn sample_draft() -> Draft {
    Draft {
        crop_type: Some("wheat".to_string()),
        variety: Some("hd2967".to_string()),
        season: Some(Season::Rabi),
        field_area: Some(dec!(2.5)),
        irrigation_schedule: vec![IrrigationEntry {
            water_amount: Some(dec!(1000)),
            ..Default::default()
        }],
        fertilizer_applications: vec![FertilizerApplication {
            kind: Some("urea".to_string()),
            quantity: Some(dec!(50)),
            ..Default::default()
        }],
        ..Default::default()
    }
}

#[test]
fn load_without_a_file_returns_the_empty_draft() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    assert_eq!(store.load(), Draft::default());
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    let draft = sample_draft();

    store.save(&draft).unwrap();

    assert_eq!(store.load(), draft);
}

#[test]
fn a_second_store_over_the_same_directory_sees_the_draft() {
    // Simulates a page reload: new process, same device, same blob.
    let dir = TempDir::new().unwrap();
    let draft = sample_draft();
    FileStore::new(dir.path()).save(&draft).unwrap();

    let reopened = FileStore::new(dir.path());

    assert_eq!(reopened.load(), draft);
}

#[test]
fn save_overwrites_the_previous_blob() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    store.save(&sample_draft()).unwrap();
    let replacement = Draft {
        crop_type: Some("rice".to_string()),
        ..Default::default()
    };
    store.save(&replacement).unwrap();

    assert_eq!(store.load(), replacement);
}

#[test]
fn clear_removes_the_file() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    store.save(&sample_draft()).unwrap();

    store.clear().unwrap();

    assert!(!store.path().exists());
    assert_eq!(store.load(), Draft::default());
}

#[test]
fn clear_without_a_file_is_fine() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    store.clear().unwrap();
}

#[test]
fn malformed_blob_loads_as_the_empty_draft() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    std::fs::write(store.path(), "{\"cropType\": unterminated").unwrap();

    assert_eq!(store.load(), Draft::default());
}

#[test]
fn blob_uses_the_well_known_file_name() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    store.save(&Draft::default()).unwrap();

    assert!(dir.path().join(DRAFT_FILE_NAME).exists());
}

#[test]
fn factory_creates_the_data_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("data").join("drafts");

    let store = FileStoreFactory
        .create(&StoreConfig {
            backend: "file".to_string(),
            location: nested.to_string_lossy().into_owned(),
        })
        .unwrap();
    store.save(&sample_draft()).unwrap();

    assert!(nested.join(DRAFT_FILE_NAME).exists());
}

#[test]
fn registry_routes_to_the_file_backend() {
    let dir = TempDir::new().unwrap();
    let mut registry = StoreRegistry::new();
    registry.register(Box::new(FileStoreFactory));

    let store = registry
        .create(&StoreConfig {
            backend: "file".to_string(),
            location: dir.path().to_string_lossy().into_owned(),
        })
        .unwrap();
    let draft = sample_draft();
    store.save(&draft).unwrap();

    assert_eq!(store.load(), draft);
}
