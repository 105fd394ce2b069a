use folio_core::{render_project_card, ProjectRecord, RenderOptions, DEFAULT_GITHUB_URL};

fn minimal_record() -> ProjectRecord {
    let mut record = ProjectRecord::new("p1", "X", "", "🔧");
    record.tech = vec!["A".to_string(), "B".to_string()];
    record
}

#[test]
fn minimal_card_has_core_elements_and_profile_fallback() {
    let html = render_project_card(&minimal_record(), false, &RenderOptions::default());

    assert!(html.contains("🔧"));
    assert!(html.contains("X"));
    assert!(html.contains(r#"<span class="tech-tag">A</span>"#));
    assert!(html.contains(r#"<span class="tech-tag">B</span>"#));
    assert!(html.contains(r#"case-study-btn" data-project="p1""#));
    assert!(!html.contains("Live Demo"));
    assert!(html.contains(DEFAULT_GITHUB_URL));
    assert!(html.contains(">GitHub Profile</a>"));
}

#[test]
fn live_demo_link_appears_exactly_once_when_live_is_present() {
    let mut record = minimal_record();
    record.live = Some("https://demo.example.org".to_string());

    let html = render_project_card(&record, false, &RenderOptions::default());
    assert_eq!(html.matches("Live Demo").count(), 1);
    assert!(html.contains(r#"href="https://demo.example.org""#));
}

#[test]
fn github_link_uses_record_url_and_short_label() {
    let mut record = minimal_record();
    record.github = Some("https://github.com/example/repo".to_string());

    let html = render_project_card(&record, false, &RenderOptions::default());
    assert!(html.contains(r#"href="https://github.com/example/repo""#));
    assert!(html.contains(">GitHub</a>"));
    assert!(!html.contains("GitHub Profile"));
}

#[test]
fn tech_tags_render_in_order_and_idempotently() {
    let record = minimal_record();
    let options = RenderOptions::default();

    let first = render_project_card(&record, false, &options);
    let second = render_project_card(&record, false, &options);
    assert_eq!(first, second);

    let a = first.find(r#"<span class="tech-tag">A</span>"#).unwrap();
    let b = first.find(r#"<span class="tech-tag">B</span>"#).unwrap();
    assert!(a < b);
}

#[test]
fn secondary_flag_adds_the_distinguishing_class() {
    let record = minimal_record();
    let options = RenderOptions::default();

    let primary = render_project_card(&record, false, &options);
    let secondary = render_project_card(&record, true, &options);
    assert!(!primary.contains("additional-project"));
    assert!(secondary.contains("additional-project"));
}

#[test]
fn record_text_is_html_escaped() {
    let mut record = minimal_record();
    record.title = "A <b> & 'title'".to_string();

    let html = render_project_card(&record, false, &RenderOptions::default());
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;b&gt;"));
    assert!(html.contains("&amp;"));
}

#[test]
fn fallback_url_is_configurable() {
    let options = RenderOptions {
        fallback_github_url: "https://github.com/someone-else".to_string(),
    };
    let html = render_project_card(&minimal_record(), false, &options);
    assert!(html.contains("https://github.com/someone-else"));
    assert!(html.contains(">GitHub Profile</a>"));
}
