use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use backend_application::{AppState, Metrics};
use backend_domain::ports::{ApiRequest, GatewayError, HttpMethod, RawResponse, RequestGateway};
use backend_domain::{EventCreateRoute, RuntimeConfig, TicketTypeParent, TicketTypeSource};

pub const BASE: &str = "https://api.test/v1";

pub fn config(api_token: Option<&str>) -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        api_token: api_token.map(ToString::to_string),
        api_base_url: BASE.to_string(),
        request_timeout_seconds: 5,
        max_body_bytes: 1024 * 1024,
        event_create_route: EventCreateRoute::SeriesScoped,
        ticket_type_parent: TicketTypeParent::Series,
        ticket_type_source: TicketTypeSource::Embedded,
        max_pages: 10,
        source_api_key: None,
        target_api_key: None,
    }
}

/// Fixed answers per (method, url). Unknown POSTs get a fresh id, unknown GETs a 404.
#[derive(Default)]
pub struct FixedGateway {
    answers: Mutex<HashMap<(HttpMethod, String), (u16, String)>>,
    created: Mutex<u32>,
}

impl FixedGateway {
    pub fn answer(self, method: HttpMethod, url: &str, status: u16, body: Value) -> Self {
        self.answers
            .lock()
            .expect("answers")
            .insert((method, url.to_string()), (status, body.to_string()));
        self
    }
}

#[async_trait]
impl RequestGateway for FixedGateway {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, GatewayError> {
        let known = self
            .answers
            .lock()
            .expect("answers")
            .get(&(request.method, request.url.clone()))
            .cloned();
        let (status, body) = match (known, request.method) {
            (Some(answer), _) => answer,
            (None, HttpMethod::Post) => {
                let mut created = self.created.lock().expect("created");
                *created += 1;
                (200, format!(r#"{{"data":{{"id":"new_{}"}}}}"#, created))
            }
            (None, HttpMethod::Get) => (404, r#"{"message":"not found"}"#.to_string()),
        };
        if (200..300).contains(&status) {
            Ok(RawResponse {
                status,
                url: request.url,
                body,
            })
        } else {
            Err(GatewayError::Http {
                status,
                body,
                method: request.method,
                url: request.url,
            })
        }
    }
}

pub fn state(gateway: FixedGateway, api_token: Option<&str>) -> AppState {
    AppState {
        config: config(api_token),
        gateway: Arc::new(gateway),
        metrics: Arc::new(Metrics::default()),
    }
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}
