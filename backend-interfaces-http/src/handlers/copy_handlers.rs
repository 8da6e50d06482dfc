use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::Value;

use backend_application::commands::copy_commands;
use backend_application::dtos::CopySeriesRequest;
use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::authorize;

/// 200 with the report on success, 500 with the attributed failure otherwise.
pub async fn copy_event_series(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CopySeriesRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let Json(payload) = payload.map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;
    let outcome = copy_commands::copy_event_series(&state, payload).await?;
    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    Ok((status, Json(outcome.to_json())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{body_json, state, FixedGateway, BASE};
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{HeaderValue, Request};
    use axum::response::IntoResponse;
    use backend_domain::ports::HttpMethod;
    use serde_json::json;

    fn payload(series_id: Option<&str>) -> Result<Json<CopySeriesRequest>, JsonRejection> {
        Ok(Json(CopySeriesRequest {
            source_api_key: Some("sk_source".to_string()),
            target_api_key: Some("sk_target".to_string()),
            series_id: series_id.map(ToString::to_string),
        }))
    }

    async fn extract(body: &'static str) -> Result<Json<CopySeriesRequest>, JsonRejection> {
        let request = Request::builder()
            .method("POST")
            .uri("/api/copy-event-series")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .expect("request");
        Json::<CopySeriesRequest>::from_request(request, &()).await
    }

    fn series_gateway() -> FixedGateway {
        FixedGateway::default()
            .answer(
                HttpMethod::Get,
                &format!("{BASE}/event_series/es_1"),
                200,
                json!({"data": {"id": "es_1", "name": "Spring"}}),
            )
            .answer(
                HttpMethod::Get,
                &format!("{BASE}/events"),
                200,
                json!({"data": [{
                    "id": "ev_1",
                    "start": {"date": "2026-05-01", "time": "19:00"},
                    "end": {"date": "2026-05-01", "time": "22:00"},
                    "ticket_types": [{"id": "tt_1", "name": "General", "price": 1500}]
                }]}),
            )
    }

    #[tokio::test]
    async fn success_reports_counts() {
        let response = copy_event_series(
            State(state(series_gateway(), None)),
            HeaderMap::new(),
            payload(Some("es_1")),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": true,
                "new_series_id": "new_1",
                "events_created": 1,
                "ticket_types_created": 1
            })
        );
    }

    #[tokio::test]
    async fn remote_failure_is_attributed() {
        let gateway = series_gateway().answer(
            HttpMethod::Post,
            &format!("{BASE}/event_series"),
            403,
            json!({"message": "forbidden"}),
        );
        let response = copy_event_series(State(state(gateway, None)), HeaderMap::new(), payload(Some("es_1")))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["account"], "target");
        assert_eq!(body["method"], "POST");
        assert_eq!(body["status"], 403);
        assert!(body["error"]
            .as_str()
            .expect("message")
            .starts_with("API Error (POST, target): "));
    }

    #[tokio::test]
    async fn missing_series_is_bad_request() {
        let response = copy_event_series(
            State(state(FixedGateway::default(), None)),
            HeaderMap::new(),
            payload(None),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Missing required parameters"})
        );
    }

    #[tokio::test]
    async fn token_is_enforced() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer wrong"));
        let response = copy_event_series(
            State(state(series_gateway(), Some("secret"))),
            headers,
            payload(Some("es_1")),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn numeric_series_id_is_copied() {
        let payload = extract(
            r#"{"source_api_key":"sk_source","target_api_key":"sk_target","series_id":1}"#,
        )
        .await;
        let gateway = FixedGateway::default()
            .answer(
                HttpMethod::Get,
                &format!("{BASE}/event_series/1"),
                200,
                json!({"id": 1, "name": "Spring"}),
            )
            .answer(HttpMethod::Get, &format!("{BASE}/events"), 200, json!([]));
        let response = copy_event_series(State(state(gateway, None)), HeaderMap::new(), payload)
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["new_series_id"], "new_1");
    }

    #[tokio::test]
    async fn malformed_body_is_a_json_bad_request() {
        let payload = extract("{not json").await;
        assert!(payload.is_err());
        let response = copy_event_series(
            State(state(FixedGateway::default(), None)),
            HeaderMap::new(),
            payload,
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().is_some_and(|message| !message.is_empty()));
    }
}
