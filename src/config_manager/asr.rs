use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for the Bhashini ASR pipeline task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ASRConfig {
    /// Service id per source language code, e.g. `"hi" -> "ai4bharat/conformer-hi-gpu--t4"`
    #[serde(rename = "service_ids")]
    #[serde(default)]
    pub service_ids: HashMap<String, String>,

    #[serde(rename = "default_service_id")]
    pub default_service_id: Option<String>,

    /// Fail locally instead of sending a task without `serviceId`
    #[serde(rename = "require_service_id")]
    #[serde(default)]
    pub require_service_id: bool,

    #[serde(rename = "audio_format")]
    #[serde(default = "default_audio_format")]
    pub audio_format: String, // "wav", "flac", "mp3"

    #[serde(rename = "sampling_rate")]
    #[serde(default = "default_sampling_rate")]
    pub sampling_rate: u32,
}

fn default_audio_format() -> String {
    "wav".to_string()
}

fn default_sampling_rate() -> u32 {
    16000
}

impl ASRConfig {
    /// Service id serving `source_lang`, falling back to the default one
    pub fn service_id_for(&self, source_lang: &str) -> Option<&str> {
        self.service_ids
            .get(source_lang)
            .or(self.default_service_id.as_ref())
            .map(String::as_str)
    }
}

impl Default for ASRConfig {
    fn default() -> Self {
        Self {
            service_ids: HashMap::new(),
            default_service_id: None,
            require_service_id: false,
            audio_format: default_audio_format(),
            sampling_rate: default_sampling_rate(),
        }
    }
}
