use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{
    ApiKey, EventCreateRoute, RuntimeConfig, TicketTypeParent, TicketTypeSource,
};

pub const CONFIG_PATH_ENV: &str = "BOXOFFICE_COPIER_CONFIG";
const ENV_PREFIX: &str = "BOXOFFICE_COPIER_";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub api_base_url: String,
    pub request_timeout_seconds: u64,
    pub max_body_bytes: u64,
    pub event_create_route: EventCreateRoute,
    pub ticket_type_parent: TicketTypeParent,
    pub ticket_type_source: TicketTypeSource,
    pub max_pages: u32,
    pub source_api_key: Option<String>,
    pub target_api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            api_token: None,
            api_base_url: "https://api.tickettailor.com/v1".to_string(),
            request_timeout_seconds: 30,
            max_body_bytes: 1024 * 1024,
            event_create_route: EventCreateRoute::SeriesScoped,
            ticket_type_parent: TicketTypeParent::Series,
            ticket_type_source: TicketTypeSource::Embedded,
            max_pages: 100,
            source_api_key: None,
            target_api_key: None,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_overrides(|key| env::var(key).ok());
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    pub fn normalize(&mut self) {
        for value in [
            &mut self.api_token,
            &mut self.source_api_key,
            &mut self.target_api_key,
        ] {
            if value.as_ref().is_some_and(|raw| raw.trim().is_empty()) {
                *value = None;
            }
        }
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(anyhow!(
                "api_base_url must be an http(s) url, got '{}'",
                self.api_base_url
            ));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.max_pages == 0 {
            return Err(anyhow!("max_pages must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            api_base_url: self.api_base_url.clone(),
            request_timeout_seconds: self.request_timeout_seconds,
            max_body_bytes: self.max_body_bytes,
            event_create_route: self.event_create_route,
            ticket_type_parent: self.ticket_type_parent,
            ticket_type_source: self.ticket_type_source,
            max_pages: self.max_pages,
            source_api_key: ApiKey::from_optional(self.source_api_key.clone()),
            target_api_key: ApiKey::from_optional(self.target_api_key.clone()),
        }
    }

    /// `lookup` receives full variable names, e.g. `BOXOFFICE_COPIER_BIND_ADDR`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(value) = var("BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = var("API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Some(value) = var("API_BASE_URL") {
            self.api_base_url = value;
        }
        if let Some(value) = var("REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Some(value) = var("MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Some(value) = var("MAX_PAGES") {
            self.max_pages = value.parse().unwrap_or(self.max_pages);
        }
        if let Some(value) = var("EVENT_CREATE_ROUTE") {
            match EventCreateRoute::parse(&value) {
                Some(route) => self.event_create_route = route,
                None => warn!("ignoring unknown event_create_route '{}'", value),
            }
        }
        if let Some(value) = var("TICKET_TYPE_PARENT") {
            match TicketTypeParent::parse(&value) {
                Some(parent) => self.ticket_type_parent = parent,
                None => warn!("ignoring unknown ticket_type_parent '{}'", value),
            }
        }
        if let Some(value) = var("TICKET_TYPE_SOURCE") {
            match TicketTypeSource::parse(&value) {
                Some(source) => self.ticket_type_source = source,
                None => warn!("ignoring unknown ticket_type_source '{}'", value),
            }
        }
        if let Some(value) = var("SOURCE_API_KEY") {
            self.source_api_key = Some(value);
        }
        if let Some(value) = var("TARGET_API_KEY") {
            self.target_api_key = Some(value);
        }
    }
}
