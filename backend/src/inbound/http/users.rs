//! Users API handlers.
//!
//! ```text
//! GET /api/users
//! GET /api/users/{id}
//! POST /api/users {"name":"John Doe","email":"john@example.com"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{Envelope, ErrorEnvelope};
use crate::inbound::http::schemas::{
    CreateUserRequestSchema, UserEnvelopeSchema, UsersEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;

// An empty body reads as an empty object so both fields report as missing;
// unparseable JSON reads as null and fails the format check.
fn parse_payload(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Object(Map::new());
    }
    serde_json::from_slice(body).unwrap_or_else(|error| {
        debug!(%error, "request body is not valid JSON");
        Value::Null
    })
}

/// List every registered user in insertion order.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use user_registry::inbound::http::users::list_users;
///
/// let app = App::new().service(web::scope("/api").service(list_users));
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = UsersEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Envelope<Vec<User>>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(Envelope::new(users)))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserEnvelopeSchema),
        (status = 404, description = "User not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Envelope<User>>> {
    let id = path.into_inner();
    let user = state.users.find_user(&id).await?;
    Ok(web::Json(Envelope::new(user)))
}

/// Register a user.
///
/// The body is read as raw bytes so malformed JSON is reported through the
/// same validation envelope as rule violations.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequestSchema,
    responses(
        (status = 201, description = "User created", body = UserEnvelopeSchema),
        (status = 400, description = "Validation failed", body = ErrorEnvelope),
        (status = 409, description = "Email already exists", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let payload = parse_payload(&body);
    let user = state.users_command.create_user(&payload).await?;
    Ok(HttpResponse::Created().json(Envelope::new(user)))
}
