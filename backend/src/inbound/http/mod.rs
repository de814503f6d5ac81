//! HTTP inbound adapter exposing REST endpoints.

pub mod envelope;
pub mod error;
pub mod health;
pub mod root;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::ApiResult;

use actix_web::web;

/// Register every route on an Actix application or scope.
///
/// Callers must register [`HttpState`] and [`HealthState`] as `web::Data`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use user_registry::inbound::http::{self, health::HealthState, state::HttpState};
/// use user_registry::outbound::memory::InMemoryUserStore;
///
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::with_store(Arc::new(
///         InMemoryUserStore::default(),
///     ))))
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(http::configure);
/// ```
///
/// [`HttpState`]: state::HttpState
/// [`HealthState`]: health::HealthState
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root::banner)
        .service(health::health)
        .service(health::ready)
        .service(health::live)
        .service(
            web::scope("/api")
                .service(users::list_users)
                .service(users::get_user)
                .service(users::create_user),
        );
}
