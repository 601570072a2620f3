use common::editor::{normalize_html, DocumentSession, SavePhase};

/// What the editing surface holds after Bold was applied and text typed.
const SURFACE_AFTER_BOLD: &str = r#"<p><b>Effective date</b> 1 March</p><div><br></div>"#;

#[test]
fn bold_then_type_reaches_the_save_payload() {
    let mut session = DocumentSession::loaded("<p>Effective date</p>".into());

    let emitted = normalize_html(SURFACE_AFTER_BOLD);
    assert!(emitted.contains("<b>Effective date</b>"));

    assert!(session.edit(emitted.clone()));
    assert!(session.is_dirty());

    let payload = session.begin_save();
    assert_eq!(payload.as_deref(), Some(emitted.as_str()));

    // Further clicks while the POST is outstanding produce no payload.
    assert_eq!(session.begin_save(), None);
    assert_eq!(session.begin_save(), None);
    assert!(session.is_saving());

    session.save_succeeded();
    assert_eq!(session.phase(), &SavePhase::Idle);
    assert!(!session.is_dirty());
}

#[test]
fn failed_save_keeps_the_draft_and_allows_a_retry() {
    let mut session = DocumentSession::default();
    session.edit(normalize_html("<p><b>Cookies</b></p>"));
    assert!(session.begin_save().is_some());

    session.save_failed("Something went wrong. Please try again.");
    assert!(matches!(session.phase(), SavePhase::Failed(_)));
    assert_eq!(session.draft(), "<p><b>Cookies</b></p>");
    assert!(session.is_dirty());

    assert_eq!(session.begin_save().as_deref(), Some("<p><b>Cookies</b></p>"));
}
