use folio_core::{ProjectRecord, ProjectStore, StoreError};

fn record(id: &str, tag: Option<&str>) -> ProjectRecord {
    let mut record = ProjectRecord::new(id, format!("Project {id}"), "", "🔧");
    record.tag = tag.map(str::to_string);
    record
}

#[test]
fn partitions_preserve_source_order() {
    let store = ProjectStore::from_records(vec![
        record("a", None),
        record("b", Some("additional")),
        record("c", None),
        record("d", Some("additional")),
    ])
    .unwrap();

    let featured: Vec<&str> = store.featured().map(|r| r.id.as_str()).collect();
    let additional: Vec<&str> = store.additional().map(|r| r.id.as_str()).collect();
    assert_eq!(featured, ["a", "c"]);
    assert_eq!(additional, ["b", "d"]);
    assert!(store.has_additional());
    assert_eq!(store.len(), 4);
}

#[test]
fn lookup_hits_by_id_and_misses_quietly() {
    let store = ProjectStore::from_records(vec![record("a", None), record("b", None)]).unwrap();

    assert_eq!(store.get("b").map(|r| r.id.as_str()), Some("b"));
    assert!(store.get("missing").is_none());
}

#[test]
fn duplicate_ids_are_a_load_error() {
    let err = ProjectStore::from_records(vec![record("a", None), record("a", None)]).unwrap_err();
    match err {
        StoreError::DuplicateId(id) => assert_eq!(id, "a"),
        other => panic!("expected DuplicateId, got {other}"),
    }
}

#[test]
fn invalid_records_are_a_load_error() {
    let err = ProjectStore::from_records(vec![record("", None)]).unwrap_err();
    assert!(matches!(err, StoreError::Invalid(_)));
}

#[test]
fn from_json_decodes_records_in_order() {
    let payload = r#"[
        {"id": "p1", "title": "One", "description": "d", "tech": ["A"], "emoji": "🔧"},
        {"id": "p2", "title": "Two", "description": "d", "tech": [], "emoji": "⚙️", "type": "additional"}
    ]"#;
    let store = ProjectStore::from_json(payload).unwrap();

    assert_eq!(store.records()[0].id, "p1");
    assert_eq!(store.records()[1].id, "p2");
    assert!(store.records()[1].is_additional());
}

#[test]
fn from_json_rejects_malformed_payload() {
    let err = ProjectStore::from_json("{not json").unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
}

#[test]
fn without_additional_records_the_secondary_group_is_empty() {
    let store = ProjectStore::from_records(vec![record("a", None)]).unwrap();
    assert!(!store.has_additional());
    assert_eq!(store.additional().count(), 0);
}
