use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use backend_application::{AppState, Metrics};
use backend_infrastructure::{AppConfig, HttpRequestGateway};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let gateway = HttpRequestGateway::new(Duration::from_secs(
            runtime_config.request_timeout_seconds,
        ))?;
        info!(
            api_base_url = %runtime_config.api_base_url,
            event_create_route = ?runtime_config.event_create_route,
            ticket_type_parent = ?runtime_config.ticket_type_parent,
            ticket_type_source = ?runtime_config.ticket_type_source,
            "configured box office api"
        );

        let state = AppState {
            config: runtime_config,
            gateway: Arc::new(gateway),
            metrics: Arc::new(Metrics::default()),
        };
        Ok(Self { state })
    }
}
