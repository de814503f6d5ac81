//! Service banner served at the root path.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Human-readable service name shown in the banner.
pub const SERVICE_NAME: &str = "User registry API";

/// Banner payload for `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Banner {
    /// Always `true`.
    pub success: bool,
    /// Service name.
    #[schema(example = "User registry API")]
    pub message: String,
    /// Crate version.
    #[schema(example = "0.1.0")]
    pub version: String,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            success: true,
            message: SERVICE_NAME.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

/// Describe the running service.
#[utoipa::path(
    get,
    path = "/",
    tags = ["service"],
    responses((status = 200, description = "Service banner", body = Banner))
)]
#[get("/")]
pub async fn banner() -> web::Json<Banner> {
    web::Json(Banner::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};

    #[actix_web::test]
    async fn banner_reports_name_and_version() {
        let app = actix_test::init_service(App::new().service(banner)).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;

        assert!(response.status().is_success());
        let body: Banner = actix_test::read_body_json(response).await;
        assert!(body.success);
        assert_eq!(body.message, SERVICE_NAME);
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
