use roster::{IdStrategy, ManagerConfig, RecordManager, RecordSchema, RosterError};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "schema": "minimal",
            "pageSize": 10,
            "notificationTtlMs": 1500,
            "idStrategy": {{ "kind": "sequential", "start": 100 }}
        }}"#
    )
    .unwrap();

    let config = ManagerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.schema, RecordSchema::Minimal);
    assert_eq!(config.page_size, 10);
    assert_eq!(config.page_size_options, vec![5, 10, 25]);
    assert_eq!(config.notification_ttl, Duration::from_millis(1500));
    assert_eq!(config.id_strategy, IdStrategy::Sequential { start: 100 });
}

#[test]
fn test_empty_object_is_default() {
    let config = ManagerConfig::from_json_str("{}").unwrap();
    assert_eq!(config, ManagerConfig::default());
}

#[test]
fn test_timestamp_strategy() {
    let config = ManagerConfig::from_json_str(r#"{ "idStrategy": { "kind": "timestamp" } }"#)
        .unwrap();
    assert_eq!(config.id_strategy, IdStrategy::Timestamp);
}

#[test]
fn test_custom_options_must_contain_page_size() {
    let result = ManagerConfig::from_json_str(r#"{ "pageSizeOptions": [20, 50] }"#);
    assert!(matches!(result, Err(RosterError::InvalidPageSize(5))));

    let config =
        ManagerConfig::from_json_str(r#"{ "pageSize": 20, "pageSizeOptions": [20, 50] }"#)
            .unwrap();
    assert_eq!(config.page_size, 20);
}

#[test]
fn test_unknown_schema_rejected() {
    let result = ManagerConfig::from_json_str(r#"{ "schema": "huge" }"#);
    assert!(matches!(result, Err(RosterError::Config(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ManagerConfig::from_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(RosterError::IoError(_))));
}

#[test]
fn test_first_id_follows_strategy() {
    let config = ManagerConfig::new(RecordSchema::Minimal)
        .id_strategy(IdStrategy::Sequential { start: 100 });
    let mut manager = RecordManager::new(config).unwrap();

    let outcome = manager
        .add(roster::RecordDraft::new("Ana", "20"))
        .unwrap();
    assert_eq!(outcome.record().map(|r| r.id()), Some(100));
}
