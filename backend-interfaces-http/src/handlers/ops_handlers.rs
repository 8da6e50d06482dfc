use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use backend_application::dtos::SourceKeyQuery;
use backend_application::queries::connection_queries;
use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn test_api(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SourceKeyQuery>,
) -> Result<Json<Value>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    connection_queries::check_connection(&state, query).await?;
    Ok(Json(json!({
        "success": true,
        "message": "API connection successful",
    })))
}

pub async fn health_live() -> StatusCode {
    StatusCode::OK
}

pub async fn metrics_prometheus(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !authorize(&state.config, &headers) {
        return (StatusCode::UNAUTHORIZED, "unauthorized".to_string()).into_response();
    }
    let payload = state.metrics.render_prometheus();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    (headers, payload).into_response()
}
