use crate::entities::CopyFailure;
use crate::error::DomainError;
use crate::ports::GatewayError;
use crate::value_objects::Account;

const NOT_FOUND: u16 = 404;

/// Why a copy step failed, tagged with the account whose credential was in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub account: Account,
    pub error: StepError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    Gateway(GatewayError),
    Domain(DomainError),
}

impl StepFailure {
    pub fn gateway(account: Account, error: GatewayError) -> Self {
        Self {
            account,
            error: StepError::Gateway(error),
        }
    }

    pub fn domain(account: Account, error: DomainError) -> Self {
        Self {
            account,
            error: StepError::Domain(error),
        }
    }
}

/// Builds the caller-facing failure record. Diagnostic only.
pub fn classify_failure(failure: &StepFailure) -> CopyFailure {
    let account = failure.account;
    match &failure.error {
        StepError::Gateway(error) => {
            let method = error.method();
            let message = match error {
                GatewayError::Http { status, body, url, .. } => {
                    let mut message = format!("API Error ({}, {}): {}", method, account, body);
                    if *status == NOT_FOUND {
                        message.push_str(&format!(" (URL: {})", url));
                    }
                    message
                }
                GatewayError::Transport { description, .. } => {
                    format!("Request failed ({}, {}): {}", method, account, description)
                }
                GatewayError::Decode { description, .. } => format!(
                    "API Error ({}, {}): unexpected response: {}",
                    method, account, description
                ),
            };
            CopyFailure {
                message,
                account,
                method: Some(method.to_string()),
                url: Some(error.url().to_string()),
                status: error.status(),
            }
        }
        StepError::Domain(error) => CopyFailure {
            message: format!("Data Error ({}): {}", account, error),
            account,
            method: None,
            url: None,
            status: None,
        },
    }
}

/// Message for failed single-account reads such as listing series.
pub fn describe_read_failure(error: &GatewayError) -> String {
    match error {
        GatewayError::Http { status, body, url, .. } => {
            let mut message = format!("API Error: {}", body);
            if *status == NOT_FOUND {
                message.push_str(&format!(" (URL: {})", url));
            }
            message
        }
        other => other.to_string(),
    }
}
