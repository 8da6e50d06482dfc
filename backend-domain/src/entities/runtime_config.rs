// Runtime configuration handed to the application layer

use crate::value_objects::{
    ApiEndpoints, ApiKey, EventCreateRoute, TicketTypeParent, TicketTypeSource,
};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub api_base_url: String,
    pub request_timeout_seconds: u64,
    pub max_body_bytes: u64,
    pub event_create_route: EventCreateRoute,
    pub ticket_type_parent: TicketTypeParent,
    pub ticket_type_source: TicketTypeSource,
    pub max_pages: u32,
    pub source_api_key: Option<ApiKey>,
    pub target_api_key: Option<ApiKey>,
}

impl RuntimeConfig {
    pub fn copy_settings(&self) -> CopySettings {
        CopySettings {
            endpoints: ApiEndpoints::new(&self.api_base_url),
            event_create_route: self.event_create_route,
            ticket_type_parent: self.ticket_type_parent,
            ticket_type_source: self.ticket_type_source,
            max_pages: self.max_pages.max(1),
        }
    }
}

/// What a copy run needs to know about the remote API contract.
#[derive(Debug, Clone)]
pub struct CopySettings {
    pub endpoints: ApiEndpoints,
    pub event_create_route: EventCreateRoute,
    pub ticket_type_parent: TicketTypeParent,
    pub ticket_type_source: TicketTypeSource,
    pub max_pages: u32,
}

impl CopySettings {
    pub fn new(endpoints: ApiEndpoints) -> Self {
        Self {
            endpoints,
            event_create_route: EventCreateRoute::default(),
            ticket_type_parent: TicketTypeParent::default(),
            ticket_type_source: TicketTypeSource::default(),
            max_pages: 100,
        }
    }
}
