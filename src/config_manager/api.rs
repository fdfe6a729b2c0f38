use serde::{Deserialize, Serialize};

/// Connection settings for the Bhashini inference endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(rename = "inference_url")]
    #[serde(default = "default_inference_url")]
    pub inference_url: String,

    /// Sent verbatim in the `Authorization` header
    #[serde(rename = "api_key")]
    pub api_key: String,

    #[serde(rename = "user_id")]
    pub user_id: Option<String>,

    #[serde(rename = "ulca_api_key")]
    pub ulca_api_key: Option<String>,

    /// No timeout is applied when unset
    #[serde(rename = "timeout_secs")]
    pub timeout_secs: Option<u64>,
}

fn default_inference_url() -> String {
    "https://dhruva-api.bhashini.gov.in/services/inference/pipeline".to_string()
}

impl ApiConfig {
    pub fn new(inference_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            inference_url: inference_url.into(),
            api_key: api_key.into(),
            user_id: None,
            ulca_api_key: None,
            timeout_secs: None,
        }
    }
}
