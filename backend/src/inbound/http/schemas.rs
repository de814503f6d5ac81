//! OpenAPI schema definitions for domain types and envelopes.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the wire shape of their counterparts and exist only
//! for OpenAPI generation.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Identifier assigned at creation.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Display name, at most 100 characters.
    #[schema(example = "John Doe")]
    name: String,
    /// Email address, unique across users.
    #[schema(example = "john@example.com")]
    email: String,
    /// Creation time as an RFC 3339 UTC timestamp.
    #[schema(example = "2026-10-19T09:30:00.000Z")]
    created_at: String,
}

/// OpenAPI schema for a success envelope carrying one user.
#[derive(ToSchema)]
#[schema(as = UserEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserEnvelopeSchema {
    /// Always `true`.
    success: bool,
    data: UserSchema,
}

/// OpenAPI schema for a success envelope carrying every user.
#[derive(ToSchema)]
#[schema(as = UsersEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UsersEnvelopeSchema {
    /// Always `true`.
    success: bool,
    data: Vec<UserSchema>,
}

/// OpenAPI schema for the `POST /api/users` request body.
#[derive(ToSchema)]
#[schema(as = CreateUserRequest)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CreateUserRequestSchema {
    /// Display name; must not be blank.
    #[schema(example = "John Doe")]
    name: String,
    /// Email address in `local@domain.tld` form.
    #[schema(example = "john@example.com")]
    email: String,
}
