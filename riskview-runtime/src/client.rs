use riskview_core::config::ServiceConfig;
use riskview_core::types::ComparisonResult;
use riskview_engine::error::CompareError;
use riskview_engine::traits::CompareClient;
use riskview_providers::compare::build_compare_request;
use riskview_providers::parse::parse_compare_response;
use riskview_providers::runtime::HttpExecutor;

/// The real [`CompareClient`]: one POST against the configured base address.
///
/// Failure mapping is the only logic here. Transport problems keep the
/// underlying message, a non-success status carries the body text for the
/// surface, and an undecodable success body is malformed.
#[derive(Debug, Clone)]
pub struct HttpCompareClient {
    config: ServiceConfig,
    executor: HttpExecutor,
}

impl HttpCompareClient {
    pub fn new(config: ServiceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            executor: HttpExecutor::new()?,
        })
    }
}

#[async_trait::async_trait]
impl CompareClient for HttpCompareClient {
    async fn compare(&self, prompt: &str) -> Result<ComparisonResult, CompareError> {
        let req = build_compare_request(&self.config, prompt);
        tracing::debug!(url = %req.url, "dispatching comparison request");

        let resp = self
            .executor
            .execute(&req)
            .await
            .map_err(|e| CompareError::Transport(e.to_string()))?;

        if !(200..=299).contains(&resp.status) {
            tracing::warn!(status = resp.status, "comparison request rejected");
            return Err(CompareError::Service {
                status: resp.status,
                body: String::from_utf8_lossy(&resp.body).into_owned(),
            });
        }

        let result = parse_compare_response(&resp.body)
            .map_err(|e| CompareError::Malformed(e.to_string()))?;
        tracing::debug!(run_id = result.run_id, "comparison run resolved");
        Ok(result)
    }
}
