use riskview_core::prompt::is_submittable;
use riskview_core::types::RiskFlag;
use serde::Serialize;

/// Lifecycle of one comparison submission.
///
/// `Idle` is the initial stage; `Succeeded`/`Failed` are terminal per
/// submission and submittable again. There is no partial-result stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStage {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl Default for ViewStage {
    fn default() -> Self {
        Self::Idle
    }
}

pub fn stage_label(stage: ViewStage) -> &'static str {
    match stage {
        ViewStage::Idle => "idle",
        ViewStage::Submitting => "submitting",
        ViewStage::Succeeded => "succeeded",
        ViewStage::Failed => "failed",
    }
}

/// Snapshot of everything the surface needs to render.
///
/// A result and an error are mutually exclusive: a success clears the error,
/// a failure leaves the result fields cleared. Both are cleared on entry into
/// `Submitting`, so no stale data is visible during a fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ViewState {
    pub prompt: String,
    pub stage: ViewStage,
    pub run_id: Option<i64>,
    pub response_a: String,
    pub response_b: String,
    pub disagreement_score: Option<f64>,
    pub flags: Vec<RiskFlag>,
    pub error: Option<String>,
}

impl ViewState {
    pub fn is_in_flight(&self) -> bool {
        self.stage == ViewStage::Submitting
    }

    /// The trigger control is enabled exactly when this is true.
    pub fn can_submit(&self) -> bool {
        is_submittable(&self.prompt) && !self.is_in_flight()
    }

    /// The risk panel shows whenever a score or at least one flag is present.
    pub fn has_risk_signals(&self) -> bool {
        self.disagreement_score.is_some() || !self.flags.is_empty()
    }

    /// The response panes show whenever either pane has text.
    pub fn has_responses(&self) -> bool {
        !self.response_a.is_empty() || !self.response_b.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_renders_nothing() {
        let state = ViewState::default();
        assert_eq!(state.stage, ViewStage::Idle);
        assert!(!state.is_in_flight());
        assert!(!state.can_submit());
        assert!(!state.has_risk_signals());
        assert!(!state.has_responses());
        assert!(state.error.is_none());
    }

    #[test]
    fn can_submit_requires_content_and_no_flight() {
        let mut state = ViewState {
            prompt: "compare this".into(),
            ..Default::default()
        };
        assert!(state.can_submit());

        state.stage = ViewStage::Submitting;
        assert!(!state.can_submit());

        state.stage = ViewStage::Failed;
        assert!(state.can_submit());

        state.prompt = "   ".into();
        assert!(!state.can_submit());
    }

    #[test]
    fn score_alone_counts_as_risk_signal() {
        let state = ViewState {
            disagreement_score: Some(0.0),
            ..Default::default()
        };
        assert!(state.has_risk_signals());
    }

    #[test]
    fn single_pane_counts_as_responses() {
        let state = ViewState {
            response_b: "only b".into(),
            ..Default::default()
        };
        assert!(state.has_responses());
    }

    #[test]
    fn stage_labels_are_stable() {
        assert_eq!(stage_label(ViewStage::Idle), "idle");
        assert_eq!(stage_label(ViewStage::Submitting), "submitting");
        assert_eq!(stage_label(ViewStage::Succeeded), "succeeded");
        assert_eq!(stage_label(ViewStage::Failed), "failed");
    }
}
