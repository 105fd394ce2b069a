use folio_core::{render_prodigy_card, ProdigyRecord, PRODIGY_ERROR_FRAGMENT};

fn task(live: Option<&str>) -> ProdigyRecord {
    ProdigyRecord {
        id: "t1".to_string(),
        title: "Landing Page".to_string(),
        description: "Responsive landing page".to_string(),
        task_code: "PRODIGY/WD/01".to_string(),
        tech: vec!["HTML".to_string(), "CSS".to_string()],
        highlights: vec!["Mobile first".to_string(), "No frameworks".to_string()],
        demo_steps: vec!["Open the page".to_string(), "Resize the window".to_string()],
        github: None,
        video: None,
        local_demo: None,
        live: live.map(str::to_string),
    }
}

#[test]
fn static_card_renders_without_a_wrapping_link() {
    let html = render_prodigy_card(&task(None));

    assert!(html.contains(r#"data-prodigy-id="t1""#));
    assert!(html.contains(r#"<div class="prodigy-card">"#));
    assert!(!html.contains("prodigy-card-link"));
    assert!(html.contains("PRODIGY/WD/01"));
}

#[test]
fn live_card_becomes_one_clickable_link_with_accessible_label() {
    let html = render_prodigy_card(&task(Some("https://live.example.org")));

    assert!(html.contains(r#"class="prodigy-card-link clickable""#));
    assert!(html.contains(r#"href="https://live.example.org""#));
    assert!(html.contains(r#"aria-label="Open Landing Page live demo""#));
    assert!(!html.contains(r#"<div class="prodigy-card">"#));
}

#[test]
fn highlights_and_demo_checklist_keep_wire_order() {
    let html = render_prodigy_card(&task(None));

    let first = html.find("<li>Mobile first</li>").unwrap();
    let second = html.find("<li>No frameworks</li>").unwrap();
    assert!(first < second);

    assert_eq!(html.matches(r#"<li class="demo-checklist-item">"#).count(), 2);
    assert_eq!(html.matches(r#"<span class="demo-checkbox">"#).count(), 2);
    let open = html.find("Open the page").unwrap();
    let resize = html.find("Resize the window").unwrap();
    assert!(open < resize);
}

#[test]
fn buttons_appear_only_when_present_in_fixed_order() {
    let bare = render_prodigy_card(&task(None));
    assert!(!bare.contains("prodigy-buttons"));

    let mut with_both = task(None);
    with_both.github = Some("https://github.com/example/task".to_string());
    with_both.video = Some("https://video.example.org/demo".to_string());
    let html = render_prodigy_card(&with_both);

    assert!(html.contains("prodigy-buttons"));
    let github = html.find(">GitHub</a>").unwrap();
    let video = html.find(">Video Demo</a>").unwrap();
    assert!(github < video);
}

#[test]
fn local_demo_line_is_conditional() {
    let bare = render_prodigy_card(&task(None));
    assert!(!bare.contains("local-demo"));

    let mut with_demo = task(None);
    with_demo.local_demo = Some("npm start".to_string());
    let html = render_prodigy_card(&with_demo);
    assert!(html.contains("Local demo: npm start"));
}

#[test]
fn fetch_error_fragment_is_the_documented_user_message() {
    assert!(PRODIGY_ERROR_FRAGMENT.contains("Unable to load Prodigy projects"));
    assert!(PRODIGY_ERROR_FRAGMENT.contains("error-message"));
}
