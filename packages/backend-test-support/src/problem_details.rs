//! Problem Details test helpers for backend testing
//!
//! This module provides utilities for asserting Problem Details responses
//! in both unit and integration tests without depending on backend types.

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Local ProblemDetails struct that matches the backend's structure
/// but doesn't depend on backend types
#[derive(Debug, Deserialize, Serialize)]
struct ProblemDetailsLike {
    #[serde(rename = "type")]
    type_: String,
    title: String,
    status: u16,
    detail: String,
    code: String,
}

/// Assert that raw response parts conform to the stable error contract.
///
/// Validates:
/// - HTTP status matches expected
/// - Problem Details body parses and its fields match expected values
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    assert_eq!(status, expected_status, "HTTP status mismatch");

    let body_str =
        String::from_utf8(body_bytes.to_vec()).expect("Response body should be valid UTF-8");
    let problem: ProblemDetailsLike = serde_json::from_str(&body_str)
        .unwrap_or_else(|e| panic!("Body is not Problem Details JSON ({e}): {body_str}"));

    assert_eq!(problem.code, expected_code, "error code mismatch");
    assert_eq!(
        problem.status,
        expected_status.as_u16(),
        "body status mismatch"
    );
    assert!(!problem.title.is_empty(), "title must be non-empty");

    if let Some(fragment) = expected_detail_contains {
        assert!(
            problem.detail.contains(fragment),
            "detail {:?} does not contain {:?}",
            problem.detail,
            fragment
        );
    }
}
