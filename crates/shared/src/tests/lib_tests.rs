use std::{
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{
    content::PortfolioContent,
    domain::{ContactPayload, FormField, FormState, SectionId, SubmissionStatus},
    error::{ContentError, SubmitError, SubmitErrorCode, ValidationFailure},
};

fn filled_form() -> FormState {
    FormState {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "hello".into(),
    }
}

#[test]
fn payload_snapshots_form_and_validates() {
    let payload = ContactPayload::from(&filled_form());
    assert_eq!(payload.name, "Ada");
    assert_eq!(payload.email, "ada@example.com");
    assert_eq!(payload.message, "hello");
    assert!(payload.validate().is_ok());
}

#[test]
fn rejects_payload_with_any_empty_field() {
    for field in FormField::ALL {
        let mut form = filled_form();
        form.field_mut(field).clear();
        let payload = ContactPayload::from(&form);
        assert_eq!(payload.validate(), Err(ValidationFailure), "field {field:?}");
    }
}

#[test]
fn whitespace_only_fields_count_as_filled() {
    let form = FormState {
        name: " ".into(),
        email: "x@x.com".into(),
        message: "hi".into(),
    };
    assert!(ContactPayload::from(&form).validate().is_ok());
}

#[test]
fn clearing_form_empties_every_field() {
    let mut form = filled_form();
    form.clear();
    assert_eq!(form, FormState::default());
}

#[test]
fn section_ids_display_as_lowercase_names() {
    assert_eq!(SectionId::Projects.to_string(), "projects");
    assert_eq!(SectionId::About.as_str(), "about");
}

#[test]
fn only_idle_status_accepts_submit() {
    assert!(SubmissionStatus::Idle.accepts_submit());
    assert!(!SubmissionStatus::Sending.accepts_submit());
    assert!(!SubmissionStatus::Success.accepts_submit());
    assert!(!SubmissionStatus::Error.accepts_submit());
}

#[test]
fn submit_error_reports_stable_codes() {
    assert_eq!(
        SubmitError::from(ValidationFailure).code(),
        SubmitErrorCode::Validation
    );
    assert_eq!(
        SubmitError::Unavailable("down".into()).code(),
        SubmitErrorCode::Unavailable
    );
}

#[test]
fn default_content_links_every_section() {
    let content = PortfolioContent::default();
    content.check().expect("default content is complete");
    assert_eq!(content.projects.len(), 3);
    assert_eq!(content.nav_label(SectionId::Projects), "Projects");
}

#[test]
fn nav_label_falls_back_to_section_id() {
    let content = PortfolioContent::from_toml_str(
        r#"
[[nav_links]]
section = "contact"
label = "Say hi"
"#,
    )
    .expect("parse toml");
    assert_eq!(content.nav_label(SectionId::Contact), "Say hi");
    assert_eq!(content.nav_label(SectionId::About), "about");
}

#[test]
fn partial_toml_content_falls_back_to_defaults() {
    let content = PortfolioContent::from_toml_str(
        r#"
owner_name = "Grace Hopper"
headline = "Hi, I'm Grace."
"#,
    )
    .expect("parse toml");
    assert_eq!(content.owner_name, "Grace Hopper");
    assert_eq!(content.headline, "Hi, I'm Grace.");
    assert_eq!(content.projects, PortfolioContent::default().projects);
}

#[test]
fn loads_json_content_file_and_rejects_missing_nav_link() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("portfolio_shared_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");

    let good = temp_root.join("content.json");
    fs::write(
        &good,
        r#"{"owner_name":"Ada","projects":[{"id":7,"title":"Engine","description":"Analytical"}]}"#,
    )
    .expect("write json");
    let content = PortfolioContent::load(&good).expect("load json");
    assert_eq!(content.owner_name, "Ada");
    assert_eq!(content.projects.len(), 1);
    assert!(content.projects[0].tags.is_empty());

    let bad = temp_root.join("content.toml");
    fs::write(
        &bad,
        r#"
[[nav_links]]
section = "about"
label = "About"
"#,
    )
    .expect("write toml");
    let err = PortfolioContent::load(&bad).expect_err("missing nav links");
    assert!(matches!(err, ContentError::MissingNavLink(ref s) if s == "projects"));

    let unsupported = temp_root.join("content.yaml");
    fs::write(&unsupported, "owner_name: Ada").expect("write yaml");
    assert!(matches!(
        PortfolioContent::load(&unsupported),
        Err(ContentError::UnsupportedFormat(_))
    ));

    fs::remove_dir_all(temp_root).expect("cleanup");
}
