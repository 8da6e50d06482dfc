use std::process::ExitCode;

use anyhow::{anyhow, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use backend_application::commands::copy_commands;
use backend_application::dtos::{CopySeriesRequest, SourceKeyQuery};
use backend_application::queries::series_queries;
use backend_application::{AppError, AppState};
use backend_interfaces_http::build_router;

use crate::context::AppContext;

fn build_router_with_layers(state: AppState) -> Router {
    // One copy request spans many remote calls.
    let request_timeout = state.config.request_timeout_seconds.saturating_mul(10);
    build_router(state.clone())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(
            usize::try_from(state.config.max_body_bytes).unwrap_or(usize::MAX),
        ))
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            request_timeout,
        )))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_standalone() -> Result<()> {
    let context = AppContext::new().await?;
    let state = context.state;

    let app = build_router_with_layers(state.clone());
    let addr: std::net::SocketAddr = state.config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Runs one copy and prints the JSON result to stdout.
pub async fn run_copy(
    series_id: String,
    source_api_key: Option<String>,
    target_api_key: Option<String>,
) -> Result<ExitCode> {
    let context = AppContext::new().await?;
    let request = CopySeriesRequest {
        source_api_key,
        target_api_key,
        series_id: Some(series_id),
    };
    let outcome = copy_commands::copy_event_series(&context.state, request)
        .await
        .map_err(into_anyhow)?;
    println!("{}", serde_json::to_string_pretty(&outcome.to_json())?);
    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

pub async fn run_list_series(source_api_key: Option<String>) -> Result<ExitCode> {
    let context = AppContext::new().await?;
    let series = series_queries::list_event_series(&context.state, SourceKeyQuery { source_api_key })
        .await
        .map_err(into_anyhow)?;
    println!("{}", serde_json::to_string_pretty(&series)?);
    Ok(ExitCode::SUCCESS)
}

fn into_anyhow(err: AppError) -> anyhow::Error {
    match err {
        AppError::Internal(err) => err,
        other => anyhow!(other.to_string()),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("sigterm handler unavailable: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
