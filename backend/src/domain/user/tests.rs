//! Tests for the domain user model.

use super::*;
use chrono::TimeZone;
use rstest::{fixture, rstest};
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

#[fixture]
fn user(created_at: DateTime<Utc>) -> User {
    let id = UserId::new(VALID_ID).expect("valid id");
    let draft = NewUser::try_new("John Doe", "john@example.com").expect("valid draft");
    User::new(id, draft, created_at)
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
fn user_id_rejects_malformed_values(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn random_ids_are_distinct() {
    assert_ne!(UserId::random(), UserId::random());
}

#[rstest]
fn draft_keeps_submitted_values_untrimmed() {
    let draft = NewUser::try_new("  Ada  ", " ada@example.com ").expect("valid draft");
    assert_eq!(draft.name(), "  Ada  ");
    assert_eq!(draft.email(), " ada@example.com ");
}

#[rstest]
fn draft_from_payload_reports_every_violation() {
    let report = NewUser::try_from(&json!({ "email": 12 })).expect_err("invalid payload");
    assert_eq!(
        report.messages(),
        vec![
            "Name is required".to_owned(),
            "Email must be a string".to_owned()
        ]
    );
}

#[rstest]
fn serialises_camel_case_with_millisecond_timestamp(user: User) {
    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(
        value,
        json!({
            "id": VALID_ID,
            "name": "John Doe",
            "email": "john@example.com",
            "createdAt": "2026-10-19T09:30:00.000Z",
        })
    );
}

#[rstest]
fn deserialises_wire_shape(user: User) {
    let parsed: User = serde_json::from_value(json!({
        "id": VALID_ID,
        "name": "John Doe",
        "email": "john@example.com",
        "createdAt": "2026-10-19T09:30:00.000Z",
    }))
    .expect("deserialise user");
    assert_eq!(parsed, user);
}

#[rstest]
fn deserialising_rejects_invalid_email() {
    let result = serde_json::from_value::<User>(json!({
        "id": VALID_ID,
        "name": "John Doe",
        "email": "john",
        "createdAt": "2026-10-19T09:30:00.000Z",
    }));
    assert!(result.is_err());
}
