use serde::{Deserialize, Serialize};
use crate::config_manager::api::ApiConfig;
use crate::config_manager::asr::ASRConfig;

/// Client configuration, loadable from JSON-LD, JSON or YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "@context")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,

    #[serde(rename = "api")]
    pub api: ApiConfig,

    #[serde(rename = "asr")]
    #[serde(default)]
    pub asr: ASRConfig,
}

impl Config {
    pub fn new(api: ApiConfig, asr: ASRConfig) -> Self {
        Self {
            context: None,
            api,
            asr,
        }
    }

    /// Load configuration from a file; `.jsonld`/`.json` parse as JSON, anything else as YAML
    pub fn load(path: &str) -> anyhow::Result<Self> {
        use crate::config_manager::utils::{read_config_text, validate_config};

        let content = read_config_text(path)?;
        let path_lower = path.to_lowercase();
        let value: serde_json::Value = if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        validate_config(&value)
    }
}
