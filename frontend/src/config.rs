use shared::AppConfig;

use crate::services::logging::Logger;

/// Configuration baked in at build time: `VAXTRACK_CONFIG` (a JSON document)
/// with `VAXTRACK_API_BASE_URL` and `VAXTRACK_LOG_LEVEL` applied on top.
/// Anything invalid falls back to the defaults.
pub fn load() -> AppConfig {
    let loaded = AppConfig::from_sources(
        option_env!("VAXTRACK_CONFIG"),
        option_env!("VAXTRACK_API_BASE_URL"),
        option_env!("VAXTRACK_LOG_LEVEL"),
    );
    match loaded {
        Ok(config) => config,
        Err(e) => {
            Logger::warn_with_component("config", &format!("Ignoring build-time configuration: {}", e));
            AppConfig::default()
        }
    }
}
