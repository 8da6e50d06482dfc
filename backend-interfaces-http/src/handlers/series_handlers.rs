use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::dtos::SourceKeyQuery;
use backend_application::queries::series_queries;
use backend_application::AppState;
use backend_domain::EventSeries;

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_event_series(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SourceKeyQuery>,
) -> Result<Json<Vec<EventSeries>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let series = series_queries::list_event_series(&state, query).await?;
    Ok(Json(series))
}
