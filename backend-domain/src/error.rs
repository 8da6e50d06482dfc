use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Source data does not have the shape a write needs. Continuing would drop data.
    #[error("malformed {entity} record: {detail}")]
    MalformedRecord { entity: &'static str, detail: String },
    #[error("unexpected response shape: {0}")]
    Decode(String),
    #[error("no copy recorded for {kind} {source_id}")]
    UnmappedParent { kind: &'static str, source_id: String },
}

impl DomainError {
    pub fn malformed(entity: &'static str, detail: impl Into<String>) -> Self {
        DomainError::MalformedRecord {
            entity,
            detail: detail.into(),
        }
    }
}
