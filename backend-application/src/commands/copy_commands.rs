use backend_domain::{ApiKey, CopyOutcome};

use crate::dtos::CopySeriesRequest;
use crate::{AppError, AppState, CopyOrchestrator};

/// Resolves credentials and runs one copy. Remote failures are part of the
/// returned outcome; only unusable input is an `Err`.
pub async fn copy_event_series(
    state: &AppState,
    request: CopySeriesRequest,
) -> Result<CopyOutcome, AppError> {
    let source = ApiKey::from_optional(request.source_api_key)
        .or_else(|| state.config.source_api_key.clone());
    let target = ApiKey::from_optional(request.target_api_key)
        .or_else(|| state.config.target_api_key.clone());
    let series_id = request
        .series_id
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty());

    let (Some(source), Some(target), Some(series_id)) = (source, target, series_id) else {
        return Err(AppError::BadRequest("Missing required parameters".to_string()));
    };

    state.metrics.record_copy_started();
    let orchestrator = CopyOrchestrator::new(state.gateway.clone(), state.config.copy_settings());
    let outcome = orchestrator.copy_series(&source, &target, &series_id).await;
    state.metrics.record_copy_finished(outcome.is_success());
    Ok(outcome)
}
