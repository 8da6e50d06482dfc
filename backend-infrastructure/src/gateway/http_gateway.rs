use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use tracing::debug;

use backend_domain::ports::{ApiRequest, GatewayError, HttpMethod, RawResponse, RequestGateway};

/// Box office gateway over HTTPS. The API key travels as the basic-auth
/// username with an empty password.
#[derive(Clone)]
pub struct HttpRequestGateway {
    client: Client,
}

impl HttpRequestGateway {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    fn build(&self, request: &ApiRequest) -> RequestBuilder {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        let mut builder = builder
            .basic_auth(request.credential.expose(), Some(""))
            .header(ACCEPT, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.form(body.entries());
        }
        builder
    }
}

#[async_trait]
impl RequestGateway for HttpRequestGateway {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, GatewayError> {
        let method = request.method;
        debug!(
            method = %method,
            url = %request.url,
            query = ?request.query,
            form = ?request.body.as_ref().map(|body| body.entries()),
            "api request"
        );

        let transport = |err: reqwest::Error| GatewayError::Transport {
            method,
            url: request.url.clone(),
            description: err.to_string(),
        };

        let response = self.build(&request).send().await.map_err(transport)?;
        let status = response.status();
        let final_url = response.url().to_string();
        let body = response.text().await.map_err(transport)?;
        debug!(method = %method, url = %final_url, status = status.as_u16(), body = %body, "api response");

        if !status.is_success() {
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
                method,
                url: final_url,
            });
        }
        Ok(RawResponse {
            status: status.as_u16(),
            url: final_url,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::RawQuery;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Redirect};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use backend_domain::{ApiKey, FormBody};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    async fn echo(headers: HeaderMap, RawQuery(query): RawQuery, body: String) -> Json<Value> {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };
        Json(json!({
            "authorization": header("authorization"),
            "accept": header("accept"),
            "content_type": header("content-type"),
            "query": query.unwrap_or_default(),
            "body": body,
        }))
    }

    async fn rejected() -> impl IntoResponse {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":"start_date is required"}"#,
        )
    }

    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_secs(2)).await;
        "late"
    }

    async fn spawn_server() -> String {
        let router = Router::new()
            .route("/v1/echo", get(echo).post(echo))
            .route("/v1/rejected", post(rejected))
            .route("/v1/moved", get(|| async { Redirect::temporary("/v1/echo") }))
            .route("/v1/slow", get(slow));
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });
        format!("http://{addr}/v1")
    }

    fn gateway() -> HttpRequestGateway {
        HttpRequestGateway::new(Duration::from_secs(5)).expect("client")
    }

    fn decode(response: &RawResponse) -> Value {
        serde_json::from_str(&response.body).expect("json body")
    }

    #[tokio::test]
    async fn get_sends_basic_auth_and_query() {
        let base = spawn_server().await;
        let key = ApiKey::new("sk_test");
        let request = ApiRequest::get(format!("{base}/echo"), &key).with_query("event_series_id", "es_1");

        let response = gateway().send(request).await.expect("response");
        assert_eq!(response.status, 200);
        let echoed = decode(&response);
        assert_eq!(echoed["authorization"], "Basic c2tfdGVzdDo=");
        assert_eq!(echoed["accept"], "application/json");
        assert_eq!(echoed["query"], "event_series_id=es_1");
    }

    #[tokio::test]
    async fn post_sends_form_with_repeated_keys() {
        let base = spawn_server().await;
        let key = ApiKey::new("sk_test");
        let mut body = FormBody::new();
        body.push("name", "Spring Gala");
        body.push("ticket_type_ids[]", "tt_1");
        body.push("ticket_type_ids[]", "tt_2");

        let response = gateway()
            .send(ApiRequest::post(format!("{base}/echo"), &key, body))
            .await
            .expect("response");
        let echoed = decode(&response);
        assert_eq!(
            echoed["content_type"],
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            echoed["body"],
            "name=Spring+Gala&ticket_type_ids%5B%5D=tt_1&ticket_type_ids%5B%5D=tt_2"
        );
    }

    #[tokio::test]
    async fn non_success_status_keeps_body_and_url() {
        let base = spawn_server().await;
        let key = ApiKey::new("sk_test");
        let err = gateway()
            .send(ApiRequest::post(format!("{base}/rejected"), &key, FormBody::new()))
            .await
            .expect_err("422");
        match err {
            GatewayError::Http {
                status,
                body,
                method,
                url,
            } => {
                assert_eq!(status, 422);
                assert!(body.contains("start_date is required"));
                assert_eq!(method, HttpMethod::Post);
                assert_eq!(url, format!("{base}/rejected"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn redirects_report_the_final_url() {
        let base = spawn_server().await;
        let key = ApiKey::new("sk_test");
        let response = gateway()
            .send(ApiRequest::get(format!("{base}/moved"), &key))
            .await
            .expect("response");
        assert_eq!(response.url, format!("{base}/echo"));
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let key = ApiKey::new("sk_test");
        let err = gateway()
            .send(ApiRequest::get(format!("http://{addr}/v1/events"), &key))
            .await
            .expect_err("refused");
        assert!(matches!(err, GatewayError::Transport { method: HttpMethod::Get, .. }));
        assert_eq!(err.url(), format!("http://{addr}/v1/events"));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let base = spawn_server().await;
        let key = ApiKey::new("sk_test");
        let gateway = HttpRequestGateway::new(Duration::from_millis(200)).expect("client");
        let err = gateway
            .send(ApiRequest::get(format!("{base}/slow"), &key))
            .await
            .expect_err("timeout");
        assert!(matches!(err, GatewayError::Transport { .. }));
    }
}
