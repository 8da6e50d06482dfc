use std::sync::Arc;

use backend_domain::ports::RequestGateway;
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub gateway: Arc<dyn RequestGateway>,
    pub metrics: Arc<Metrics>,
}
