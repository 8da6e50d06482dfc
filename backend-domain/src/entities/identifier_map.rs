// Source id -> target id correspondence for a single copy run

use std::collections::HashMap;
use std::fmt;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Series,
    Event,
    TicketType,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Series => "event series",
            EntityKind::Event => "event",
            EntityKind::TicketType => "ticket type",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket types are copied once per event they appear under, so their source
/// ids are scoped by the source event.
pub fn scoped_id(parent_source_id: &str, source_id: &str) -> String {
    format!("{parent_source_id}/{source_id}")
}

/// Append-only: the first mapping recorded for a source id wins.
#[derive(Debug, Default)]
pub struct IdentifierMap {
    entries: HashMap<(EntityKind, String), String>,
}

impl IdentifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the source id was already mapped; the existing entry is kept.
    pub fn record(&mut self, kind: EntityKind, source_id: &str, target_id: &str) -> bool {
        let key = (kind, source_id.to_string());
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, target_id.to_string());
        true
    }

    pub fn target_of(&self, kind: EntityKind, source_id: &str) -> Option<&str> {
        self.entries
            .get(&(kind, source_id.to_string()))
            .map(String::as_str)
    }

    /// Like `target_of`, for parents that must already have been copied.
    pub fn resolve(&self, kind: EntityKind, source_id: &str) -> Result<&str, DomainError> {
        self.target_of(kind, source_id)
            .ok_or_else(|| DomainError::UnmappedParent {
                kind: kind.as_str(),
                source_id: source_id.to_string(),
            })
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entries.keys().filter(|(k, _)| *k == kind).count()
    }
}
