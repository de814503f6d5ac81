//! Health endpoints: status snapshot plus liveness and readiness probes.
//! Document endpoints in OpenAPI via Utoipa.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use actix_web::{HttpResponse, get, http::header, web};
use chrono::SecondsFormat;
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status reported by the health snapshot.
pub const HEALTHY: &str = "healthy";

/// Process status snapshot returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    /// Always `"healthy"` while the process can answer.
    #[schema(example = "healthy")]
    pub status: String,
    /// Current time as an RFC 3339 UTC timestamp.
    #[schema(example = "2026-10-19T09:30:00.000Z")]
    pub timestamp: String,
    /// Seconds since the health state was created at startup.
    #[schema(example = 12.5)]
    pub uptime: f64,
}

/// Shared health state for the status snapshot and orchestration probes.
pub struct HealthState {
    ready: AtomicBool,
    started: Instant,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl Default for HealthState {
    fn default() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl HealthState {
    /// Create a new health state starting as not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a health state reading timestamps from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            ready: AtomicBool::new(false),
            started: Instant::now(),
            clock,
        }
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Snapshot the current status, timestamp, and uptime.
    pub fn report(&self) -> HealthReport {
        HealthReport {
            status: HEALTHY.to_owned(),
            timestamp: self.clock.utc().to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime: self.started.elapsed().as_secs_f64(),
        }
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Status snapshot. Always returns 200 with status, timestamp, and uptime.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Process status snapshot", body = HealthReport)
    )
)]
#[get("/health")]
pub async fn health(state: web::Data<HealthState>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(state.report())
}

/// Readiness probe. Return 200 once the listener is bound; return 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe. Return 200 whenever the process can answer.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive")
    )
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    HealthState::probe_response(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};

    struct FixtureClock(DateTime<Utc>);

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[fixture]
    fn state() -> web::Data<HealthState> {
        let now = Utc
            .with_ymd_and_hms(2026, 10, 19, 9, 30, 0)
            .single()
            .expect("valid fixture timestamp");
        web::Data::new(HealthState::with_clock(Arc::new(FixtureClock(now))))
    }

    #[rstest]
    fn report_uses_clock_and_non_negative_uptime(state: web::Data<HealthState>) {
        let report = state.report();
        assert_eq!(report.status, HEALTHY);
        assert_eq!(report.timestamp, "2026-10-19T09:30:00.000Z");
        assert!(report.uptime >= 0.0);
    }

    #[rstest]
    #[actix_web::test]
    async fn health_returns_snapshot(state: web::Data<HealthState>) {
        let app = actix_test::init_service(App::new().app_data(state).service(health)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let report: HealthReport = actix_test::read_body_json(response).await;
        assert_eq!(report.status, "healthy");
        assert!(DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
    }

    #[rstest]
    #[case(false, StatusCode::SERVICE_UNAVAILABLE)]
    #[case(true, StatusCode::OK)]
    #[actix_web::test]
    async fn ready_tracks_readiness(
        state: web::Data<HealthState>,
        #[case] mark_ready: bool,
        #[case] expected: StatusCode,
    ) {
        if mark_ready {
            state.mark_ready();
        }
        let app = actix_test::init_service(App::new().app_data(state).service(ready)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/ready")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), expected);
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn live_answers_before_readiness(state: web::Data<HealthState>) {
        assert!(!state.is_ready());
        let app = actix_test::init_service(App::new().app_data(state).service(live)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health/live").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
    }
}
