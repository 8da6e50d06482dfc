use axum::routing::{get, post};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{copy_handlers, ops_handlers, series_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/event-series", get(series_handlers::list_event_series))
        .route(
            "/api/copy-event-series",
            post(copy_handlers::copy_event_series),
        )
        .route("/test-api", get(ops_handlers::test_api))
        .route("/ops/health/live", get(ops_handlers::health_live))
        .route(
            "/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
