use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Parse config file contents. Unparseable input yields all defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "config unparseable, using defaults");
        AppConfig::default()
    })
}

/// Read `config.toml` and store it in the global `OnceLock`. Only the first
/// call has any effect.
///
/// A missing file means every section takes its defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let path = std::env::var("HIREWIRE_CONFIG").unwrap_or_else(|_| CONFIG_PATH.to_string());
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let config = parse_config(&contents);
                tracing::info!(path = %path, features = ?config.features, "loaded config");
                config
            }
            Err(e) => {
                tracing::info!(path = %path, error = %e, "no config file, using defaults");
                AppConfig::default()
            }
        }
    })
}

/// The loaded configuration, loading it on first access.
pub fn app_config() -> &'static AppConfig {
    load_config()
}

/// Shorthand for the `[features]` section.
pub fn feature_flags() -> &'static FeatureFlags {
    &app_config().features
}
