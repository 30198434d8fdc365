use std::sync::Arc;

use riskview_core::config::ServiceConfig;
use riskview_engine::controller::ComparisonController;

use crate::client::HttpCompareClient;
use crate::env::service_config_from_env;

/// Assemble a ready controller for the given service address.
///
/// This keeps the surface layer thin: it only renders state and forwards
/// input.
pub fn build_controller(config: ServiceConfig) -> anyhow::Result<ComparisonController> {
    tracing::info!(base_url = %config.base_url, "using comparison service");
    let client = Arc::new(HttpCompareClient::new(config)?);
    Ok(ComparisonController::new(client))
}

pub fn build_controller_from_env() -> anyhow::Result<ComparisonController> {
    build_controller(service_config_from_env())
}
