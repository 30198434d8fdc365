use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::traits::CompareClient;
use crate::view::{ViewStage, ViewState, stage_label};
use riskview_core::prompt::is_submittable;
use riskview_core::types::RiskFlag;

#[derive(Debug, Default)]
struct Inner {
    prompt: String,
    stage: ViewStage,
    run_id: Option<i64>,
    response_a: String,
    response_b: String,
    disagreement_score: Option<f64>,
    flags: Vec<RiskFlag>,
    error: Option<String>,
}

impl Inner {
    fn can_submit(&self) -> bool {
        is_submittable(&self.prompt) && self.stage != ViewStage::Submitting
    }

    fn clear_outcome(&mut self) {
        self.error = None;
        self.run_id = None;
        self.response_a.clear();
        self.response_b.clear();
        self.disagreement_score = None;
        self.flags.clear();
    }

    fn snapshot(&self) -> ViewState {
        ViewState {
            prompt: self.prompt.clone(),
            stage: self.stage,
            run_id: self.run_id,
            response_a: self.response_a.clone(),
            response_b: self.response_b.clone(),
            disagreement_score: self.disagreement_score,
            flags: self.flags.clone(),
            error: self.error.clone(),
        }
    }
}

/// Owns the view state and the request lifecycle.
///
/// All transitions happen under one lock, so a reader never observes a
/// partially applied outcome. At most one comparison is in flight: a submit
/// while `Submitting` (or with a blank prompt) is a no-op rather than a second
/// dispatch.
#[derive(Clone)]
pub struct ComparisonController {
    inner: Arc<Mutex<Inner>>,
    client: Arc<dyn CompareClient>,
}

impl ComparisonController {
    pub fn new(client: Arc<dyn CompareClient>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            client,
        }
    }

    /// Store the prompt verbatim. Trimming applies only to the submit gate.
    pub async fn update_prompt(&self, text: impl Into<String>) {
        let mut inner = self.inner.lock().await;
        inner.prompt = text.into();
    }

    pub async fn can_submit(&self) -> bool {
        self.inner.lock().await.can_submit()
    }

    pub async fn view_state(&self) -> ViewState {
        self.inner.lock().await.snapshot()
    }

    /// Run one submission to its terminal stage.
    pub async fn submit_comparison(&self) {
        self.submit_comparison_with_hook(|_state| async {}).await;
    }

    /// Same as [`submit_comparison`](Self::submit_comparison), but emits a
    /// state snapshot after every transition so a surface can mirror the
    /// lifecycle without polling.
    ///
    /// Every invocation that dispatches reaches exactly one terminal stage;
    /// the in-flight stage is left on every exit path.
    pub async fn submit_comparison_with_hook<F, Fut>(&self, on_change: F)
    where
        F: Fn(ViewState) -> Fut,
        Fut: Future<Output = ()>,
    {
        let (prompt, entered) = {
            let mut inner = self.inner.lock().await;
            if !inner.can_submit() {
                tracing::debug!(stage = stage_label(inner.stage), "submission refused");
                return;
            }

            // No stale outcome may be visible while the new request is out.
            inner.clear_outcome();
            let prev = inner.stage;
            inner.stage = ViewStage::Submitting;
            tracing::info!(
                "comparison stage: {} -> {}",
                stage_label(prev),
                stage_label(inner.stage)
            );
            (inner.prompt.clone(), inner.snapshot())
        };
        on_change(entered).await;

        let outcome = self.client.compare(&prompt).await;

        let terminal = {
            let mut inner = self.inner.lock().await;
            match outcome {
                Ok(result) => {
                    inner.stage = ViewStage::Succeeded;
                    inner.error = None;
                    inner.run_id = Some(result.run_id);
                    inner.response_a = result.response_a;
                    inner.response_b = result.response_b;
                    inner.disagreement_score = Some(result.disagreement_score);
                    inner.flags = result.flags;
                }
                Err(e) => {
                    inner.stage = ViewStage::Failed;
                    inner.error = Some(e.user_message());
                }
            }
            tracing::info!(
                "comparison stage: submitting -> {}",
                stage_label(inner.stage)
            );
            inner.snapshot()
        };
        on_change(terminal).await;
    }
}
