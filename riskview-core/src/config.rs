use serde::{Deserialize, Serialize};

/// Base address used when no override is provided.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Endpoint configuration for the comparison service.
///
/// The base address is the only configuration the comparison call depends on.
/// It is resolved once at startup and injected into whatever owns the request
/// lifecycle; nothing reads the environment ad hoc at request time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve from an environment-style value: unset or blank falls back to
    /// [`DEFAULT_API_BASE`].
    pub fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self::new(v),
            _ => Self::default(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
