use reqwest::StatusCode;
use wca_client::error::AppError;

#[test]
fn test_app_error_display_authentication() {
    let error = AppError::Authentication("token endpoint returned 401".to_string());
    assert_eq!(
        error.to_string(),
        "authentication error: token endpoint returned 401"
    );
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_app_error_display_malformed_response() {
    let error = AppError::MalformedResponse("unclosed element <RESULT>".to_string());
    assert_eq!(
        error.to_string(),
        "malformed response: unclosed element <RESULT>"
    );
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("export columns must be a list".to_string());
    assert_eq!(
        error.to_string(),
        "invalid input: export columns must be a list"
    );
}

#[test]
fn test_app_error_display_serialization() {
    let error = AppError::Serialization("write failed".to_string());
    assert_eq!(error.to_string(), "serialization error: write failed");
}

#[test]
fn test_unexpected_status_is_transport_failure() {
    let error = AppError::Unexpected(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error.is_transport_failure());
    assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[test]
fn test_other_errors_are_not_transport_failures() {
    assert!(!AppError::Authentication("x".to_string()).is_transport_failure());
    assert!(!AppError::MalformedResponse("x".to_string()).is_transport_failure());
    assert!(!AppError::InvalidInput("x".to_string()).is_transport_failure());
    assert_eq!(AppError::InvalidInput("x".to_string()).status(), None);
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_is_std_error() {
    let error: Box<dyn std::error::Error> =
        Box::new(AppError::InvalidInput("blank".to_string()));
    assert_eq!(error.to_string(), "invalid input: blank");
}
