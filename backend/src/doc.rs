//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the banner, health probes and the users endpoints
//! - **Schemas**: wire-shape wrappers ([`UserSchema`], [`UserEnvelopeSchema`],
//!   [`UsersEnvelopeSchema`], [`CreateUserRequestSchema`]) alongside the
//!   envelope and health payloads
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::envelope::ErrorEnvelope;
use crate::inbound::http::health::HealthReport;
use crate::inbound::http::root::Banner;
use crate::inbound::http::schemas::{
    CreateUserRequestSchema, UserEnvelopeSchema, UserSchema, UsersEnvelopeSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registry API",
        description = "HTTP interface for registering and reading users, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::root::banner,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
    ),
    components(schemas(
        UserSchema,
        UserEnvelopeSchema,
        UsersEnvelopeSchema,
        CreateUserRequestSchema,
        ErrorEnvelope,
        HealthReport,
        Banner
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "service", description = "Service metadata")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI registration and schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/")]
    #[case("/health")]
    #[case("/health/ready")]
    #[case("/health/live")]
    #[case("/api/users")]
    #[case("/api/users/{id}")]
    fn openapi_registers_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(
            doc.paths.paths.contains_key(path),
            "document should describe {path}"
        );
    }

    #[test]
    fn openapi_user_schema_has_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let user_schema = schemas.get("User").expect("User schema");

        for field in ["id", "name", "email", "createdAt"] {
            assert_object_schema_has_field(user_schema, field);
        }
    }

    #[test]
    fn openapi_error_envelope_has_details() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let envelope = schemas.get("ErrorEnvelope").expect("ErrorEnvelope schema");

        assert_object_schema_has_field(envelope, "success");
        assert_object_schema_has_field(envelope, "error");
        assert_object_schema_has_field(envelope, "details");
    }
}
