use super::*;

#[test]
fn validate_login_input_trims_username() {
    let credentials = validate_login_input("  bob  ", "pw").unwrap();
    assert_eq!(credentials.username, "bob");
    assert_eq!(credentials.password, "pw");
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let credentials = validate_login_input("bob", "  spaced pw  ").unwrap();
    assert_eq!(credentials.password, "  spaced pw  ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("bob", ""), Err("Enter both username and password."));
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both username and password."));
}

#[test]
fn login_failed_message_phrases_credential_rejection() {
    assert_eq!(login_failed_message(&ApiError::Http(401)), "Invalid username or password.");
    assert_eq!(login_failed_message(&ApiError::Http(403)), "Invalid username or password.");
}

#[test]
fn login_failed_message_names_other_failures() {
    assert_eq!(
        login_failed_message(&ApiError::Http(500)),
        "Login failed: server returned status 500"
    );
    assert_eq!(login_failed_message(&ApiError::Timeout), "Login failed: request timed out");
    assert_eq!(
        login_failed_message(&ApiError::Transport("connection refused".to_owned())),
        "Login failed: request failed: connection refused"
    );
}
