//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("Validation failed"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("User not found"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("Email already exists"), StatusCode::CONFLICT)]
#[case(Error::internal("Internal server error"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

async fn envelope_of(response: HttpResponse) -> ErrorEnvelope {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("response body to bytes");
    serde_json::from_slice(&bytes).expect("envelope deserialises")
}

#[rstest]
#[actix_web::test]
async fn renders_failure_envelope_with_details() {
    let error = Error::invalid_request("Validation failed")
        .with_details(vec!["Name is required".to_owned()]);

    let response = error.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope = envelope_of(response).await;
    assert_eq!(
        envelope,
        ErrorEnvelope::new("Validation failed", Some(vec!["Name is required".to_owned()]))
    );
}

#[rstest]
#[actix_web::test]
async fn conflict_envelope_has_no_details() {
    let response = Error::conflict("Email already exists").error_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let envelope = envelope_of(response).await;
    assert!(!envelope.success);
    assert_eq!(envelope.error, "Email already exists");
    assert!(envelope.details.is_none());
}

#[rstest]
#[actix_web::test]
async fn echoes_trace_id_header() {
    let response = Error::not_found("User not found")
        .with_trace_id(TRACE_ID)
        .error_response();

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace header present")
        .to_str()
        .expect("trace id is ASCII");
    assert_eq!(header, TRACE_ID);
}

#[rstest]
#[actix_web::test]
async fn omits_trace_header_out_of_scope() {
    let response = Error::not_found("User not found").error_response();
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}
