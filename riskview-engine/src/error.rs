use thiserror::Error;

/// Fallback shown when a failure carries no usable message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Everything that can go wrong between dispatching the comparison call and
/// holding a decoded result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// The request never completed (connect, DNS, I/O, client-side timeout).
    #[error("{0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("comparison service returned status {status}")]
    Service { status: u16, body: String },

    /// A success-status body that could not be decoded.
    #[error("{0}")]
    Malformed(String),
}

impl CompareError {
    /// Collapse the failure into the single string the surface shows.
    ///
    /// A service body is surfaced verbatim whenever it is non-empty; otherwise
    /// the failure's own message wins when it has one; otherwise
    /// [`GENERIC_FAILURE_MESSAGE`]. Status codes and internals never leak.
    pub fn user_message(&self) -> String {
        match self {
            CompareError::Service { body, .. } if !body.is_empty() => body.clone(),
            CompareError::Transport(msg) | CompareError::Malformed(msg) if !msg.is_empty() => {
                msg.clone()
            }
            _ => GENERIC_FAILURE_MESSAGE.into(),
        }
    }
}
