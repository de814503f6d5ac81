//! Tests for domain error construction and trace capture.

use super::*;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("Validation failed"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("User not found"), ErrorCode::NotFound)]
#[case(Error::conflict("Email already exists"), ErrorCode::Conflict)]
#[case(Error::internal("Internal server error"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn details_are_absent_until_attached() {
    let error = Error::conflict("Email already exists");
    assert!(error.details().is_none());

    let error = error.with_details(vec!["a@b.co".to_owned()]);
    assert_eq!(error.details(), Some(&["a@b.co".to_owned()][..]));
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::not_found("User not found") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn display_uses_message() {
    let error = Error::conflict("Email already exists");
    assert_eq!(error.to_string(), "Email already exists");
}
