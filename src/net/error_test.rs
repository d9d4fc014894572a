use super::*;

#[test]
fn display_messages_name_the_failure_class() {
    assert_eq!(
        ApiError::Transport("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
    assert_eq!(ApiError::Timeout.to_string(), "request timed out");
    assert_eq!(ApiError::Http(500).to_string(), "server returned status 500");
    assert_eq!(
        ApiError::Parse("expected value at line 1".to_owned()).to_string(),
        "invalid response body: expected value at line 1"
    );
}

#[test]
fn unauthorized_and_forbidden_are_auth_failures() {
    assert!(ApiError::Http(401).is_auth_failure());
    assert!(ApiError::Http(403).is_auth_failure());
}

#[test]
fn other_failures_are_not_auth_failures() {
    assert!(!ApiError::Http(500).is_auth_failure());
    assert!(!ApiError::Timeout.is_auth_failure());
    assert!(!ApiError::Transport("offline".to_owned()).is_auth_failure());
    assert!(!ApiError::Parse("bad json".to_owned()).is_auth_failure());
}
