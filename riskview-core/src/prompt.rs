/// True when the prompt qualifies for submission: non-empty after trimming.
///
/// Trimming is applied only here; the stored prompt and the dispatched request
/// body keep the user's text verbatim.
pub fn is_submittable(prompt: &str) -> bool {
    !prompt.trim().is_empty()
}
