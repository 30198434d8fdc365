use crate::request::{Body, HttpRequest};
use riskview_core::config::ServiceConfig;
use serde_json::json;

/// Build the single comparison call: POST `{base}/compare` with the prompt
/// text verbatim. Trimming is a submit-gate concern, not a wire concern.
pub fn build_compare_request(cfg: &ServiceConfig, prompt: &str) -> HttpRequest {
    let url = join_url(&cfg.base_url, "/compare");

    let payload = json!({ "prompt": prompt });

    HttpRequest {
        method: "POST".into(),
        url,
        headers: vec![("Content-Type".into(), "application/json".into())],
        body: Body::Json(payload.to_string()),
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
