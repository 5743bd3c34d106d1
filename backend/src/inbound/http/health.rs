//! Orchestration probes.
//!
//! `/health/ready` answers 200 only while the server is serving traffic;
//! `/health/live` answers 200 until the process starts draining.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

const STARTING: u8 = 0;
const SERVING: u8 = 1;
const DRAINING: u8 = 2;

/// Lifecycle phase shared by the probe handlers.
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthState {
    /// Starts in the not-yet-ready phase.
    pub const fn new() -> Self {
        Self {
            phase: AtomicU8::new(STARTING),
        }
    }

    /// The listener is bound and requests can be served.
    pub fn mark_ready(&self) {
        self.phase.store(SERVING, Ordering::Release);
    }

    /// The process is shutting down; both probes start failing.
    pub fn mark_draining(&self) {
        self.phase.store(DRAINING, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.phase.load(Ordering::Acquire) == SERVING
    }

    pub fn is_alive(&self) -> bool {
        self.phase.load(Ordering::Acquire) != DRAINING
    }
}

fn probe(ok: bool) -> HttpResponse {
    let mut response = if ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Serving traffic"),
        (status = 503, description = "Starting up or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe(state.is_ready())
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is alive"),
        (status = 503, description = "Process is draining")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe(state.is_alive())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    use super::*;

    async fn statuses(state: &web::Data<HealthState>) -> (StatusCode, StatusCode) {
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(ready)
                .service(live),
        )
        .await;
        let mut codes = Vec::with_capacity(2);
        for uri in ["/health/ready", "/health/live"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(
                res.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
                Some("no-store")
            );
            codes.push(res.status());
        }
        (codes[0], codes[1])
    }

    #[rstest]
    #[actix_web::test]
    async fn probes_follow_the_lifecycle() {
        let state = web::Data::new(HealthState::new());
        assert_eq!(
            statuses(&state).await,
            (StatusCode::SERVICE_UNAVAILABLE, StatusCode::OK)
        );

        state.mark_ready();
        assert_eq!(statuses(&state).await, (StatusCode::OK, StatusCode::OK));

        state.mark_draining();
        assert_eq!(
            statuses(&state).await,
            (
                StatusCode::SERVICE_UNAVAILABLE,
                StatusCode::SERVICE_UNAVAILABLE
            )
        );
    }
}
