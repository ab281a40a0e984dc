use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Export traces and logs over OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Serve the OpenAPI reference at `/docs`.
    #[serde(default)]
    pub api_docs: bool,
}

/// `[directory]` section: where seed postings come from.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DirectoryConfig {
    /// JSON file holding an array of postings. Built-in seed data is used
    /// when unset or unreadable.
    #[serde(default)]
    pub seed_file: Option<String>,
}

/// `[session]` section: a demo user signed in from the first page load.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionConfig {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub session: SessionConfig,
}
