use anyhow::anyhow;
use tracing::{info, warn};

use backend_domain::{classify_failure, Account, ApiKey};

use crate::api_client::AccountClient;
use crate::dtos::SourceKeyQuery;
use crate::{AppError, AppState};

/// Checks that a key can read the box office and its events.
pub async fn check_connection(state: &AppState, query: SourceKeyQuery) -> Result<(), AppError> {
    let key = ApiKey::from_optional(query.source_api_key)
        .or_else(|| state.config.source_api_key.clone())
        .ok_or_else(|| AppError::BadRequest("Source API key is required".to_string()))?;

    state.metrics.record_connection_check();
    let settings = state.config.copy_settings();
    let client = AccountClient::new(
        state.gateway.as_ref(),
        &settings.endpoints,
        &key,
        Account::Source,
    );

    for url in [settings.endpoints.box_office(), settings.endpoints.events()] {
        if let Err(failure) = client.ping(url.clone()).await {
            warn!("connection check failed: {}", classify_failure(&failure).message);
            return Err(AppError::Internal(anyhow!("API connection failed")));
        }
        info!("connection check reached {}", url);
    }
    Ok(())
}
