// In-memory gateway for exercising the copy flow without a network.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use backend_domain::ports::{ApiRequest, GatewayError, HttpMethod, RawResponse, RequestGateway};
use backend_domain::{EventCreateRoute, RuntimeConfig, TicketTypeParent, TicketTypeSource};

use crate::{AppState, Metrics};

pub(crate) const BASE: &str = "https://api.test/v1";

pub(crate) fn test_state(gateway: Arc<ScriptedGateway>) -> AppState {
    AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_token: None,
            api_base_url: BASE.to_string(),
            request_timeout_seconds: 5,
            max_body_bytes: 1024 * 1024,
            event_create_route: EventCreateRoute::SeriesScoped,
            ticket_type_parent: TicketTypeParent::Series,
            ticket_type_source: TicketTypeSource::Embedded,
            max_pages: 10,
            source_api_key: None,
            target_api_key: None,
        },
        gateway,
        metrics: Arc::new(Metrics::default()),
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Scripted {
    Json(Value),
    Status(u16, String),
    Unreachable(String),
}

impl Scripted {
    pub(crate) fn json(value: Value) -> Self {
        Scripted::Json(value)
    }

    pub(crate) fn status(status: u16, body: &str) -> Self {
        Scripted::Status(status, body.to_string())
    }
}

/// Answers by (method, url). Scripted answers for one route are consumed in
/// order and the last one repeats. Unscripted POSTs succeed with a fresh id.
#[derive(Default)]
pub(crate) struct ScriptedGateway {
    routes: Mutex<HashMap<(HttpMethod, String), VecDeque<Scripted>>>,
    calls: Mutex<Vec<ApiRequest>>,
    created: AtomicUsize,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn script(&self, method: HttpMethod, url: &str, answer: Scripted) {
        self.routes
            .lock()
            .expect("routes lock")
            .entry((method, url.to_string()))
            .or_default()
            .push_back(answer);
    }

    pub(crate) fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn posts(&self) -> Vec<ApiRequest> {
        self.calls()
            .into_iter()
            .filter(|call| call.method == HttpMethod::Post)
            .collect()
    }

    fn answer_for(&self, request: &ApiRequest) -> Option<Scripted> {
        let mut routes = self.routes.lock().expect("routes lock");
        let queue = routes.get_mut(&(request.method, request.url.clone()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait]
impl RequestGateway for ScriptedGateway {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, GatewayError> {
        self.calls.lock().expect("calls lock").push(request.clone());
        let answer = match self.answer_for(&request) {
            Some(answer) => answer,
            None if request.method == HttpMethod::Post => {
                let n = self.created.fetch_add(1, Ordering::SeqCst) + 1;
                Scripted::Json(json!({"data": {"id": format!("new_{n}")}}))
            }
            None => Scripted::Status(404, r#"{"message":"not scripted"}"#.to_string()),
        };
        match answer {
            Scripted::Json(value) => Ok(RawResponse {
                status: 200,
                url: request.url,
                body: value.to_string(),
            }),
            Scripted::Status(status, body) => Err(GatewayError::Http {
                status,
                body,
                method: request.method,
                url: request.url,
            }),
            Scripted::Unreachable(description) => Err(GatewayError::Transport {
                method: request.method,
                url: request.url,
                description,
            }),
        }
    }
}
