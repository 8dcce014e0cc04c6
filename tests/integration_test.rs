//! Integration tests for contact-filter
//!
//! These tests drive the public API end to end: CSV ingestion, tag
//! filtering, preset persistence across store instances, and CSV export.

use std::fs;
use std::path::{Path, PathBuf};

use contact_filter::contacts::{Contact, ContactCollection, ContactError, export, ingest};
use contact_filter::filter::{ContactFilterExt, FilterSelection, TagMode, TagVocabulary, filter};
use contact_filter::presets::{PresetEntry, PresetError, PresetStore};

fn alice() -> Contact {
    Contact::new("alice+mini", "US")
}

fn scenario_contacts() -> ContactCollection {
    vec![
        alice(),
        Contact::new("bob+hdy", "UK"),
        Contact::new("carol+mini+hdy", "CA"),
    ]
    .into()
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_and_or_scenario() {
    let contacts = scenario_contacts();

    let and = FilterSelection::new(["+mini", "+hdy"], TagMode::All).unwrap();
    assert_eq!(filter(&contacts, &and).unwrap().names(), vec!["carol+mini+hdy"]);

    let or = FilterSelection::new(["+mini", "+hdy"], TagMode::Any).unwrap();
    assert_eq!(
        filter(&contacts, &or).unwrap().names(),
        vec!["alice+mini", "bob+hdy", "carol+mini+hdy"]
    );
}

#[test]
fn test_save_list_export_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = PresetStore::without_backup(dir.path().join("presets.json")).unwrap();

    store
        .save("team1", PresetEntry::new(vec!["+mini".to_string()], vec![alice()]))
        .unwrap();
    assert!(store.list().contains(&"team1"));

    let entry = store.get("team1").unwrap();
    let csv = export::to_csv_string(&entry.contacts).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("display_name,country"));
    assert_eq!(lines.next(), Some("alice+mini,US"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_csv_to_preset_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_file(
        dir.path(),
        "contacts.csv",
        "display_name,Country\n\
         Broker A +MED +atl,GR\n\
         Broker B +med,IT\n\
         Owner C +pg,AE\n\
         Owner D,\n",
    );

    let contacts = ingest::read_csv(&csv).unwrap();
    assert_eq!(contacts.len(), 4);
    assert_eq!(contacts.as_slice()[3].country, "N/A");

    let vocab = TagVocabulary::default();
    let selection = vocab
        .selection(&["+med".to_string(), "+pg".to_string()], TagMode::Any)
        .unwrap();
    let matched = contacts.filter_tags(&selection).unwrap();
    assert_eq!(
        matched.names(),
        vec!["broker a +med +atl", "broker b +med", "owner c +pg"]
    );

    let store_path = dir.path().join("presets.json");
    {
        let mut store = PresetStore::without_backup(store_path.clone()).unwrap();
        let picked = matched.select_by_name(&["Broker B +MED".to_string(), "owner c +pg".to_string()]);
        store
            .save(
                "gulf-med",
                PresetEntry::new(selection.tags().to_vec(), picked.into_vec()),
            )
            .unwrap();
    }

    // a new session reads what the previous one wrote
    let store = PresetStore::without_backup(store_path).unwrap();
    let entry = store.get("gulf-med").unwrap();
    assert_eq!(entry.tags, vec!["+med".to_string(), "+pg".to_string()]);

    let out = dir.path().join("exports").join("gulf-med.csv");
    export::write_csv_file(&out, &entry.contacts).unwrap();
    assert_eq!(
        fs::read_to_string(out).unwrap(),
        "display_name,country\nbroker b +med,IT\nowner c +pg,AE\n"
    );
}

#[test]
fn test_rename_then_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("presets.json");
    let value = PresetEntry::new(vec!["+hdy".to_string()], vec![Contact::new("bob+hdy", "UK")]);

    let mut store = PresetStore::without_backup(path.clone()).unwrap();
    store.save("a", value.clone()).unwrap();
    store.rename("a", "b").unwrap();

    let mut reopened = PresetStore::without_backup(path).unwrap();
    let storage = reopened.load().unwrap();
    assert!(!storage.contains("a"));
    assert_eq!(storage.get("b"), Some(&value));
}

#[test]
fn test_delete_then_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("presets.json");

    let mut store = PresetStore::without_backup(path.clone()).unwrap();
    store.save("team1", PresetEntry::default()).unwrap();
    store.delete("team1").unwrap();

    let reopened = PresetStore::without_backup(path).unwrap();
    assert!(reopened.list().is_empty());

    assert!(matches!(store.delete("team1"), Err(PresetError::NotFound(_))));
}

#[test]
fn test_backing_file_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("presets.json");

    let mut store = PresetStore::without_backup(path.clone()).unwrap();
    store
        .save("second", PresetEntry::new(vec!["+mini".to_string()], vec![alice()]))
        .unwrap();
    store.save("first", PresetEntry::default()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value["second"],
        serde_json::json!({
            "tags": ["+mini"],
            "contacts": [{"display_name": "alice+mini", "country": "US"}]
        })
    );
    assert_eq!(value["first"], serde_json::json!({"tags": [], "contacts": []}));

    // insertion order survives on disk
    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.find("\"second\"").unwrap() < raw.find("\"first\"").unwrap());
}

#[test]
fn test_hand_written_store_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "presets.json",
        r#"{"Med Brokers": {"tags": ["+med"], "contacts": [{"display_name": "broker b +med", "country": "IT"}]}}"#,
    );

    let store = PresetStore::without_backup(path).unwrap();
    assert_eq!(store.list(), vec!["Med Brokers"]);
    assert_eq!(store.get("Med Brokers").unwrap().contacts.len(), 1);
}

#[test]
fn test_corrupt_store_is_not_reset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "presets.json", "{\"team1\": [1, 2");

    let err = PresetStore::open(path.clone()).unwrap_err();
    assert!(matches!(err, PresetError::Corrupt { .. }));
    assert_eq!(fs::read_to_string(path).unwrap(), "{\"team1\": [1, 2");
}

#[test]
fn test_missing_display_name_column() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_file(dir.path(), "contacts.csv", "name,country\nalice,US\n");

    let err = ingest::read_csv(&csv).unwrap_err();
    assert!(matches!(err, ContactError::MissingColumn(_)));
}

#[test]
fn test_misspelled_store_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let contents = r#"{"a": {"tag": ["+mini"], "contact": []}}"#;
    let path = write_file(dir.path(), "presets.json", contents);

    let err = PresetStore::without_backup(path.clone()).unwrap_err();
    assert!(matches!(err, PresetError::Corrupt { .. }));
    assert_eq!(fs::read_to_string(path).unwrap(), contents);
}
