//! Error handling tests
//!
//! Verify status code and wire-format mapping for every user-facing error

use axum::http::StatusCode;
use axum::response::IntoResponse;
use flashgen::AppError;

#[test]
fn test_user_facing_errors_map_to_client_statuses() {
    let cases = [
        (AppError::EmptyTechnology, StatusCode::BAD_REQUEST),
        (
            AppError::UnknownModel("gpt-5".to_string()),
            StatusCode::BAD_REQUEST,
        ),
        (
            AppError::QuotaExhausted("GPT-4".to_string()),
            StatusCode::PAYMENT_REQUIRED,
        ),
        (
            AppError::DuplicatePage("learn_rust_beginner_gpt4".to_string()),
            StatusCode::CONFLICT,
        ),
        (
            AppError::DuplicateEntry("learn_rust_beginner_gpt4".to_string()),
            StatusCode::CONFLICT,
        ),
        (AppError::TooManyRequests, StatusCode::TOO_MANY_REQUESTS),
        (
            AppError::GenerationFailed("timeout".to_string()),
            StatusCode::BAD_GATEWAY,
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(error.status_code(), expected, "wrong status for {error:?}");
        // None of these are fatal: they all serialize into a response
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }
}

#[test]
fn test_only_generation_failures_are_retryable() {
    assert!(AppError::GenerationFailed("503".to_string()).is_retryable());

    assert!(!AppError::EmptyTechnology.is_retryable());
    assert!(!AppError::QuotaExhausted("GPT-4".to_string()).is_retryable());
    assert!(!AppError::DuplicatePage("slug".to_string()).is_retryable());
    assert!(!AppError::TooManyRequests.is_retryable());
    assert!(!AppError::UnknownModel("gpt-5".to_string()).is_retryable());
}

#[test]
fn test_error_types_are_distinct() {
    let errors = [
        AppError::EmptyTechnology,
        AppError::QuotaExhausted("GPT-4".to_string()),
        AppError::DuplicatePage("slug".to_string()),
        AppError::TooManyRequests,
        AppError::GenerationFailed("timeout".to_string()),
        AppError::UnknownModel("gpt-5".to_string()),
        AppError::DuplicateEntry("slug".to_string()),
    ];

    let mut seen = std::collections::HashSet::new();
    for error in &errors {
        assert!(seen.insert(error.error_type()), "duplicate type for {error:?}");
    }
}

#[test]
fn test_messages_are_user_presentable() {
    assert_eq!(
        AppError::EmptyTechnology.to_string(),
        "Please enter a technology you want to learn"
    );
    assert_eq!(
        AppError::QuotaExhausted("GPT-4".to_string()).to_string(),
        "No free uses left for GPT-4"
    );
    assert!(AppError::TooManyRequests.to_string().contains("Too many requests"));
}
