use order_terminal_wasm::domain::errors::{ApiErrorCode, AppError};

fn api(code: &str) -> AppError {
    AppError::from_api_body(code, None)
}

#[test]
fn every_known_code_maps_to_its_fixed_message() {
    let table = [
        ("INSUFFICIENT_BALANCE", "Insufficient balance. Please check your available balance."),
        ("INVALID_PRICE", "Invalid price. Please enter a valid price."),
        ("INVALID_AMOUNT", "Invalid amount. Please enter a valid amount."),
        ("UNSUPPORTED_PAIR", "This trading pair is not supported."),
        ("BAD_REQUEST", "Invalid request. Please check your input."),
        ("INVALID_REQUEST", "Invalid request. Please check your input."),
        ("UNAUTHORIZED", "Authentication required. Please log in."),
        ("NOT_FOUND", "Resource not found."),
        ("INTERNAL_ERROR", "Server error. Please try again later."),
        ("INTERNAL_SERVER_ERROR", "Server error. Please try again later."),
    ];

    for (code, expected) in table {
        assert_eq!(api(code).user_message(), expected, "code {code}");
    }
}

#[test]
fn bad_request_prefers_the_server_message() {
    let error = AppError::from_api_body("BAD_REQUEST", Some("price must be positive".to_string()));
    assert_eq!(error.user_message(), "price must be positive");

    // Codes with fixed copy ignore the server message.
    let error =
        AppError::from_api_body("INSUFFICIENT_BALANCE", Some("anything".to_string()));
    assert_eq!(
        error.user_message(),
        "Insufficient balance. Please check your available balance."
    );
}

#[test]
fn unknown_codes_fall_back_to_the_server_message() {
    let error = AppError::from_api_body("RATE_LIMITED", Some("slow down".to_string()));
    assert_eq!(error, AppError::UnknownApi { message: Some("slow down".to_string()) });
    assert_eq!(error.user_message(), "slow down");

    let error = AppError::from_api_body("RATE_LIMITED", None);
    assert_eq!(error.user_message(), "An unexpected error occurred.");
}

#[test]
fn transport_failures_have_their_own_copy() {
    assert_eq!(
        AppError::Connection.user_message(),
        "Unable to connect to server. Please check your internet connection."
    );
    assert_eq!(AppError::Timeout.user_message(), "Request timed out. Please try again.");
    assert_eq!(
        AppError::Other(String::new()).user_message(),
        "An unexpected error occurred. Please try again."
    );
    assert_eq!(AppError::Other("boom".to_string()).user_message(), "boom");
}

#[test]
fn classification_predicates() {
    assert!(AppError::Connection.is_network_error());
    assert!(AppError::Timeout.is_network_error());
    assert!(AppError::Timeout.is_timeout_error());
    assert!(!AppError::Connection.is_timeout_error());

    assert!(api("UNAUTHORIZED").is_auth_error());
    assert!(!api("NOT_FOUND").is_auth_error());

    for code in ["BAD_REQUEST", "INVALID_REQUEST", "INVALID_PRICE", "INVALID_AMOUNT"] {
        assert!(api(code).is_validation_error(), "code {code}");
    }
    assert!(!api("INSUFFICIENT_BALANCE").is_validation_error());
    assert!(!AppError::Connection.is_validation_error());
}

#[test]
fn display_matches_the_user_message() {
    let error = api("UNSUPPORTED_PAIR");
    assert_eq!(error.to_string(), error.user_message());
    let _: &dyn std::error::Error = &error;
}

#[test]
fn codes_round_trip_to_their_wire_names() {
    assert_eq!(ApiErrorCode::UnsupportedPair.as_ref(), "UNSUPPORTED_PAIR");
    assert_eq!(ApiErrorCode::InsufficientBalance.as_ref(), "INSUFFICIENT_BALANCE");
}
