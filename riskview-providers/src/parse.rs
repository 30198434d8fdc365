use anyhow::Context;
use riskview_core::types::ComparisonResult;

pub fn parse_compare_response(body: &[u8]) -> anyhow::Result<ComparisonResult> {
    let result: ComparisonResult =
        serde_json::from_slice(body).context("decode comparison JSON")?;
    Ok(result)
}
