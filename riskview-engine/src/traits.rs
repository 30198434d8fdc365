use crate::error::CompareError;
use async_trait::async_trait;
use riskview_core::types::ComparisonResult;

/// The single outbound seam of the controller.
///
/// Implementations own transport and decoding; the controller only sees a
/// decoded result or a [`CompareError`]. Keeping the seam object-safe lets
/// tests drive the state machine with scripted outcomes and no network.
#[async_trait]
pub trait CompareClient: Send + Sync {
    async fn compare(&self, prompt: &str) -> Result<ComparisonResult, CompareError>;
}
