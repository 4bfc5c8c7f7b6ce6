use super::*;

#[test]
fn default_compose_state_has_no_error() {
    assert!(ComposeState::default().error.is_none());
}

#[test]
fn submit_error_display_includes_the_reason() {
    let error = SubmitError::new("create message failed: 503");
    assert_eq!(error.to_string(), "could not send message: create message failed: 503");
}

#[test]
fn submit_errors_compare_by_reason() {
    assert_eq!(SubmitError::new("a"), SubmitError::new("a"));
    assert_ne!(SubmitError::new("a"), SubmitError::new("b"));
}
