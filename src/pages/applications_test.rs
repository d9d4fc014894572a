use super::*;

fn make_application(company: &str) -> Application {
    Application {
        company: company.to_owned(),
        role: "Eng".to_owned(),
        status: 1,
        notes: vec![],
        username: "bob".to_owned(),
    }
}

#[test]
fn company_labels_preserves_server_order() {
    let apps = vec![make_application("Acme"), make_application("Initech"), make_application("Globex")];
    assert_eq!(company_labels(&apps), vec!["Acme", "Initech", "Globex"]);
}

#[test]
fn company_labels_renders_only_company_text() {
    let body = r#"[{"company":"Acme","role":"Eng","status":1,"notes":[],"username":"bob"}]"#;
    let apps: Vec<Application> = serde_json::from_str(body).unwrap();
    assert_eq!(company_labels(&apps), vec!["Acme"]);
}

#[test]
fn company_labels_empty_list_yields_no_items() {
    assert!(company_labels(&[]).is_empty());
}

#[test]
fn load_failed_message_names_the_reason() {
    assert_eq!(
        load_failed_message(&ApiError::Http(500)),
        "Could not load applications: server returned status 500"
    );
    assert_eq!(
        load_failed_message(&ApiError::Parse("expected value".to_owned())),
        "Could not load applications: invalid response body: expected value"
    );
}

#[test]
fn signed_in_label_uses_username_when_known() {
    assert_eq!(signed_in_label(Some("bob")), "Signed in as bob");
    assert_eq!(signed_in_label(None), "Signed in");
}
