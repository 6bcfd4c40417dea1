use super::*;

#[test]
fn auth_failure_decodes_camel_case_fields() {
    let body = r#"{"reasonCode":"PasswordExpired","reason":"too old","userName":"alice"}"#;
    let failure: AuthFailure = serde_json::from_str(body).expect("decode");
    assert_eq!(failure.reason_code, AuthFailureCode::PasswordExpired);
    assert_eq!(failure.reason.as_deref(), Some("too old"));
    assert_eq!(failure.user_name.as_deref(), Some("alice"));
}

#[test]
fn auth_failure_tolerates_missing_optional_fields() {
    let failure: AuthFailure =
        serde_json::from_str(r#"{"reasonCode":"InvalidCredentials"}"#).expect("decode");
    assert_eq!(failure.reason_code, AuthFailureCode::InvalidCredentials);
    assert!(failure.reason.is_none());
    assert!(failure.user_name.is_none());
}

#[test]
fn unrecognized_reason_code_decodes_to_unknown() {
    let failure: AuthFailure =
        serde_json::from_str(r#"{"reasonCode":"SomethingNew","reason":null,"userName":null}"#)
            .expect("decode");
    assert_eq!(failure.reason_code, AuthFailureCode::Unknown);
}

#[test]
fn request_error_display_names_the_status() {
    let err = RequestError::Status(RequestFailure { status: 403, body: String::new() });
    assert_eq!(err.to_string(), "request failed with status 403");

    let err = RequestError::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn file_entry_decodes_listing_payload() {
    let entry: FileEntry = serde_json::from_str(
        r#"{"path":"/docs/report.pdf","name":"report.pdf","is_directory":false,"size":2048}"#,
    )
    .expect("decode");
    assert_eq!(entry.path, "/docs/report.pdf");
    assert!(!entry.is_directory);
    assert_eq!(entry.size, Some(2048));
}
