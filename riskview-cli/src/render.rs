use riskview_engine::view::ViewState;

// Pane width in characters; two panes plus the gutter fit a standard
// 80-column terminal.
const PANE_WIDTH: usize = 38;

/// Render everything a terminal state snapshot shows after a transition.
///
/// Sections appear only when their gating condition holds: the error region
/// with an error, the run acknowledgment after a success, the risk panel with
/// a score or flags, the panes with any response text.
pub fn render_view(state: &ViewState) -> String {
    let mut out = String::new();

    if let Some(err) = &state.error {
        out.push_str(&format!("error: {err}\n"));
    }

    if let Some(run_id) = state.run_id {
        out.push_str(&format!("Logged run #{run_id}. Prompt not stored.\n"));
    }

    if let Some(panel) = render_risk_panel(state) {
        out.push('\n');
        out.push_str(&panel);
    }

    if let Some(panes) = render_panes(state) {
        out.push('\n');
        out.push_str(&panes);
    }

    out
}

fn render_risk_panel(state: &ViewState) -> Option<String> {
    if !state.has_risk_signals() {
        return None;
    }

    let mut out = String::from("Risk Signals\n");
    if let Some(score) = state.disagreement_score {
        out.push_str(&format!("  Disagreement score: {score}\n"));
    }

    if state.flags.is_empty() {
        out.push_str("  No flags triggered.\n");
    } else {
        // Service order, unsorted.
        for flag in &state.flags {
            out.push_str(&format!("  - {} ({})\n", flag.kind, flag.severity));
            out.push_str(&format!("    {}\n", flag.reason));
        }
    }
    Some(out)
}

fn render_panes(state: &ViewState) -> Option<String> {
    if !state.has_responses() {
        return None;
    }
    Some(two_column(
        "Model A",
        &state.response_a,
        "Model B",
        &state.response_b,
        PANE_WIDTH,
    ))
}

/// Lay two texts out side by side, each wrapped to `width` characters.
pub fn two_column(
    left_title: &str,
    left: &str,
    right_title: &str,
    right: &str,
    width: usize,
) -> String {
    let mut l = wrap(left, width);
    let mut r = wrap(right, width);
    let rows = l.len().max(r.len());
    l.resize(rows, String::new());
    r.resize(rows, String::new());

    let mut out = String::new();
    out.push_str(&format!("{left_title:<width$}  | {right_title}\n"));
    out.push_str(&format!("{}  | {}\n", "-".repeat(width), "-".repeat(width)));
    for i in 0..rows {
        out.push_str(&format!("{:<width$}  | {}\n", l[i], r[i]));
    }
    out
}

/// Greedy word wrap honoring explicit newlines. Words longer than the column
/// are hard-broken so alignment never overflows.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw in text.lines() {
        let mut current = String::new();
        for word in raw.split_whitespace() {
            let word_len = word.chars().count();
            let line_len = current.chars().count();

            if !current.is_empty() && line_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if word_len <= width {
                current = word.to_string();
            } else {
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(width) {
                    lines.push(chunk.iter().collect());
                }
                current = lines.pop().unwrap_or_default();
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskview_engine::view::ViewStage;
    use riskview_core::types::RiskFlag;

    #[test]
    fn empty_state_renders_nothing() {
        assert_eq!(render_view(&ViewState::default()), "");
    }

    #[test]
    fn error_region_only_when_error_present() {
        let state = ViewState {
            error: Some("internal error".into()),
            stage: ViewStage::Failed,
            ..Default::default()
        };
        let out = render_view(&state);
        assert!(out.contains("error: internal error"));
        assert!(!out.contains("Logged run"));
        assert!(!out.contains("Risk Signals"));
    }

    #[test]
    fn acknowledgment_appears_after_success() {
        let state = ViewState {
            run_id: Some(7),
            ..Default::default()
        };
        assert!(render_view(&state).contains("Logged run #7. Prompt not stored."));
    }

    #[test]
    fn score_without_flags_reports_none_triggered() {
        let state = ViewState {
            disagreement_score: Some(0.42),
            ..Default::default()
        };
        let out = render_view(&state);
        assert!(out.contains("Risk Signals"));
        assert!(out.contains("Disagreement score: 0.42"));
        assert!(out.contains("No flags triggered."));
    }

    #[test]
    fn flags_render_in_service_order() {
        let state = ViewState {
            disagreement_score: Some(0.9),
            flags: vec![
                RiskFlag {
                    kind: "phishing".into(),
                    severity: "high".into(),
                    reason: "asks for a password".into(),
                },
                RiskFlag {
                    kind: "tone".into(),
                    severity: "low".into(),
                    reason: "urgent framing".into(),
                },
            ],
            ..Default::default()
        };
        let out = render_view(&state);
        let phishing = out.find("phishing (high)").unwrap();
        let tone = out.find("tone (low)").unwrap();
        assert!(phishing < tone);
        assert!(out.contains("asks for a password"));
    }

    #[test]
    fn panes_show_when_either_response_present() {
        let state = ViewState {
            response_b: "only b answered".into(),
            ..Default::default()
        };
        let out = render_view(&state);
        assert!(out.contains("Model A"));
        assert!(out.contains("Model B"));
        assert!(out.contains("only b answered"));
    }

    #[test]
    fn two_column_pads_shorter_side() {
        let out = two_column("Model A", "one two three", "Model B", "x", 7);
        let rows: Vec<&str> = out.lines().collect();
        // title row + rule row + wrapped rows, equal length sides
        assert!(rows.len() >= 4);
        assert!(rows[0].starts_with("Model A"));
        assert!(rows[2].starts_with("one two"));
        assert!(rows[2].contains("| x"));
        assert!(rows[3].starts_with("three"));
    }

    #[test]
    fn wrap_hard_breaks_oversized_words() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_honors_explicit_newlines() {
        let lines = wrap("a\n\nb", 10);
        assert_eq!(lines, vec!["a", "", "b"]);
    }
}
