//! Error handling tests for the Tapsilat client

use tapsilat::{validate_gsm_number, validate_installments, TapsilatError, ValidationError};

#[test]
fn test_validation_error_fields() {
    let error = ValidationError::new("Invalid input");

    assert_eq!(error.status_code, 400);
    assert_eq!(error.code, 0);
    assert_eq!(error.message, "Invalid input");

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Tapsilat Validation Error"),
        "Error message MUST contain 'Tapsilat Validation Error' - actual: {}",
        error_msg
    );
    assert!(error_msg.contains("status_code:400"), "actual: {}", error_msg);
    assert!(error_msg.contains("code:0"), "actual: {}", error_msg);
    assert!(error_msg.contains("error:Invalid input"), "actual: {}", error_msg);
}

#[test]
fn test_validation_error_line_layout() {
    let error = ValidationError::new("National phone number too short: 012345");
    let rendered = error.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Tapsilat Validation Error",
            "status_code:400",
            "code:0",
            "error:National phone number too short: 012345",
        ]
    );
}

#[test]
fn test_installment_errors_convert_into_crate_error() {
    let error: TapsilatError = validate_installments("1,15,3").unwrap_err().into();

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Installment value '15' is invalid"),
        "Error message MUST name the offending value - actual: {}",
        error_msg
    );
    assert!(
        !error_msg.contains("'3'"),
        "Validation MUST stop at the first offending value - actual: {}",
        error_msg
    );
    assert_eq!(error.status_code(), Some(400));
}

#[test]
fn test_gsm_errors_echo_original_input() {
    let error = validate_gsm_number("+90 abc").unwrap_err();

    assert_eq!(error.message, "Invalid phone number format: +90 abc");
    assert_eq!(error.status_code, 400);
    assert_eq!(error.code, 0);
}

#[test]
fn test_api_error() {
    let error = TapsilatError::api(422, "{\"error\":\"amount required\"}");

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("API request failed with status 422"),
        "Error message MUST contain the status - actual: {}",
        error_msg
    );
    assert!(
        error_msg.contains("amount required"),
        "Error message MUST contain the response body - actual: {}",
        error_msg
    );
    assert!(error.as_validation().is_none());
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: TapsilatError = json_error.into();

    assert!(
        error.to_string().contains("JSON error"),
        "Error message MUST contain 'JSON error' - actual: {}",
        error
    );
    assert_eq!(error.status_code(), None);
}

#[test]
fn test_error_debug_format() {
    let error = TapsilatError::config("Endpoint cannot be empty");

    let debug_str = format!("{:?}", error);
    assert!(
        debug_str.contains("Config"),
        "Debug format MUST contain variant name 'Config' - actual: {}",
        debug_str
    );
    assert!(
        debug_str.contains("Endpoint cannot be empty"),
        "Debug format MUST contain error message - actual: {}",
        debug_str
    );
}
