// Alternative API contracts for re-parenting children on the target side.
// Different API generations disagree on these, so each is selectable.

use serde::{Deserialize, Serialize};

/// Where new events are created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCreateRoute {
    /// `POST event_series/{new_series_id}/events`
    #[default]
    SeriesScoped,
    /// `POST events` with `event_series_id` in the body
    TopLevel,
}

/// Which new parent a ticket type is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketTypeParent {
    /// `POST event_series/{new_series_id}/ticket_types`
    #[default]
    Series,
    /// `POST ticket_types` with `event_id` in the body
    Event,
}

/// How the ticket types of a source event are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketTypeSource {
    /// Taken from the `ticket_types` array embedded in the event record
    #[default]
    Embedded,
    /// `GET ticket_types?event_id={source_event_id}`
    ByEvent,
}

impl EventCreateRoute {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "series_scoped" => Some(EventCreateRoute::SeriesScoped),
            "top_level" => Some(EventCreateRoute::TopLevel),
            _ => None,
        }
    }
}

impl TicketTypeParent {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "series" => Some(TicketTypeParent::Series),
            "event" => Some(TicketTypeParent::Event),
            _ => None,
        }
    }
}

impl TicketTypeSource {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "embedded" => Some(TicketTypeSource::Embedded),
            "by_event" => Some(TicketTypeSource::ByEvent),
            _ => None,
        }
    }
}
