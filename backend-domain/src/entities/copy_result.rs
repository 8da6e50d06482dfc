// Outcome of one copy run

use serde::Serialize;
use serde_json::{json, Value};

use crate::value_objects::Account;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyReport {
    pub new_series_id: String,
    pub events_created: usize,
    pub ticket_types_created: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyFailure {
    pub message: String,
    pub account: Account,
    pub method: Option<String>,
    pub url: Option<String>,
    pub status: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Success(CopyReport),
    Failure(CopyFailure),
}

impl CopyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Success(_))
    }

    pub fn new_series_id(&self) -> Option<&str> {
        match self {
            CopyOutcome::Success(report) => Some(&report.new_series_id),
            CopyOutcome::Failure(_) => None,
        }
    }

    /// `{"success": true, ...}` or `{"error": message, ...}`.
    pub fn to_json(&self) -> Value {
        match self {
            CopyOutcome::Success(report) => json!({
                "success": true,
                "new_series_id": report.new_series_id,
                "events_created": report.events_created,
                "ticket_types_created": report.ticket_types_created,
            }),
            CopyOutcome::Failure(failure) => json!({
                "error": failure.message,
                "account": failure.account,
                "method": failure.method,
                "url": failure.url,
                "status": failure.status,
            }),
        }
    }
}
