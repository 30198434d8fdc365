use riskview_core::config::ServiceConfig;

/// Environment variable naming the comparison service base address.
pub const API_BASE_ENV: &str = "RISKVIEW_API_BASE";

/// Resolve the service configuration from the process environment.
///
/// Unset or blank falls back to [`riskview_core::config::DEFAULT_API_BASE`].
/// This is the only environment read in the repository; everything downstream
/// receives the resolved value.
pub fn service_config_from_env() -> ServiceConfig {
    ServiceConfig::from_env_value(std::env::var(API_BASE_ENV).ok())
}
