use folio_core::{CaseStudy, ProjectRecord, ProjectValidationError};

#[test]
fn new_sets_required_fields_and_empty_optionals() {
    let record = ProjectRecord::new("p1", "TaskFlow", "A task manager", "📋");

    assert_eq!(record.id, "p1");
    assert_eq!(record.title, "TaskFlow");
    assert_eq!(record.description, "A task manager");
    assert_eq!(record.emoji, "📋");
    assert!(record.tech.is_empty());
    assert_eq!(record.github, None);
    assert_eq!(record.live, None);
    assert_eq!(record.tag, None);
    assert!(!record.is_additional());
    assert!(!record.has_case_study());
}

#[test]
fn serialization_uses_camel_case_wire_fields() {
    let mut record = ProjectRecord::new("p1", "TaskFlow", "A task manager", "📋");
    record.tech = vec!["React".to_string(), "Node.js".to_string()];
    record.local_demo = Some("npm run dev".to_string());
    record.tag = Some("additional".to_string());
    record.case_study = Some(CaseStudy {
        problem: "problem".to_string(),
        solution: "solution".to_string(),
        features: vec!["one".to_string()],
        security: None,
        learned: Some("plenty".to_string()),
    });

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["localDemo"], "npm run dev");
    assert_eq!(json["type"], "additional");
    assert_eq!(json["caseStudy"]["problem"], "problem");
    assert_eq!(json["caseStudy"]["learned"], "plenty");
    // Absent optionals stay off the wire entirely.
    assert!(json.get("github").is_none());
    assert!(json["caseStudy"].get("security").is_none());

    let decoded: ProjectRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn only_the_additional_tag_selects_the_secondary_group() {
    let mut record = ProjectRecord::new("p1", "X", "", "🔧");
    assert!(!record.is_additional());

    record.tag = Some("featured".to_string());
    assert!(!record.is_additional());

    record.tag = Some("additional".to_string());
    assert!(record.is_additional());
}

#[test]
fn validate_rejects_blank_identity_fields() {
    let blank_id = ProjectRecord::new("  ", "X", "", "🔧");
    assert_eq!(blank_id.validate(), Err(ProjectValidationError::EmptyId));

    let blank_title = ProjectRecord::new("p1", "", "", "🔧");
    assert_eq!(
        blank_title.validate(),
        Err(ProjectValidationError::EmptyTitle {
            id: "p1".to_string()
        })
    );

    let valid = ProjectRecord::new("p1", "X", "", "🔧");
    assert_eq!(valid.validate(), Ok(()));
}
