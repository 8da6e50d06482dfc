use anyhow::anyhow;
use tracing::error;

use backend_domain::{describe_read_failure, Account, ApiKey, EventSeries, StepError};

use crate::api_client::AccountClient;
use crate::dtos::SourceKeyQuery;
use crate::{AppError, AppState};

pub async fn list_event_series(
    state: &AppState,
    query: SourceKeyQuery,
) -> Result<Vec<EventSeries>, AppError> {
    let source = ApiKey::from_optional(query.source_api_key)
        .or_else(|| state.config.source_api_key.clone())
        .ok_or_else(|| AppError::BadRequest("Source API key is required".to_string()))?;

    state.metrics.record_series_listing();
    let settings = state.config.copy_settings();
    let client = AccountClient::new(
        state.gateway.as_ref(),
        &settings.endpoints,
        &source,
        Account::Source,
    );
    client.list_series(settings.max_pages).await.map_err(|failure| {
        let message = match &failure.error {
            StepError::Gateway(err) => describe_read_failure(err),
            StepError::Domain(err) => err.to_string(),
        };
        error!("failed to list event series: {}", message);
        AppError::Internal(anyhow!(message))
    })
}
