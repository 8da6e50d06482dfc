use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::FormBody;
use crate::value_objects::ApiKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub credential: ApiKey,
    pub body: Option<FormBody>,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>, credential: &ApiKey) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            credential: credential.clone(),
            body: None,
            query: Vec::new(),
        }
    }

    pub fn post(url: impl Into<String>, credential: &ApiKey, body: FormBody) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            credential: credential.clone(),
            body: Some(body),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// A 2xx response. `url` is the final URL after redirects.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub url: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("{method} {url} returned {status}: {body}")]
    Http {
        status: u16,
        body: String,
        method: HttpMethod,
        url: String,
    },
    #[error("{method} {url} failed: {description}")]
    Transport {
        method: HttpMethod,
        url: String,
        description: String,
    },
    #[error("{method} {url} returned an unexpected body: {description}")]
    Decode {
        method: HttpMethod,
        url: String,
        description: String,
    },
}

impl GatewayError {
    pub fn method(&self) -> HttpMethod {
        match self {
            GatewayError::Http { method, .. }
            | GatewayError::Transport { method, .. }
            | GatewayError::Decode { method, .. } => *method,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            GatewayError::Http { url, .. }
            | GatewayError::Transport { url, .. }
            | GatewayError::Decode { url, .. } => url,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[async_trait]
pub trait RequestGateway: Send + Sync {
    /// Issues one authenticated call. Non-2xx statuses come back as `GatewayError::Http`.
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, GatewayError>;
}
