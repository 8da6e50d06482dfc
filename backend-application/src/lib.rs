// Backend Application Layer

pub mod api_client;
pub mod commands;
pub mod dtos;
pub mod error;
pub mod metrics;
pub mod orchestrator;
pub mod queries;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use error::AppError;
pub use metrics::Metrics;
pub use orchestrator::CopyOrchestrator;
pub use state::AppState;
