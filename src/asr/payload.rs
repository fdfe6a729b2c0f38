use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config_manager::ASRConfig;
use crate::errors::{BhashiniError, Result};

/// Request body for a single-task ASR pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ASRPayload {
    pub pipeline_tasks: Vec<PipelineTask>,
    pub input_data: InputData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTask {
    pub task_type: String,
    pub config: TaskConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskConfig {
    pub language: LanguageConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    pub audio_format: String,
    pub sampling_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
    pub source_language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputData {
    pub audio: Vec<AudioInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioInput {
    pub audio_content: String,
}

pub const ASR_TASK_TYPE: &str = "asr";

/// Build the ASR pipeline payload for one audio clip.
///
/// Empty inputs are passed through to the service; only a missing
/// service id under `require_service_id` fails here.
pub fn asr_payload(config: &ASRConfig, source_lang: &str, base64_audio: &str) -> Result<ASRPayload> {
    if source_lang.is_empty() || base64_audio.is_empty() {
        warn!(
            "Building ASR payload with empty input (source_lang={:?}, audio_len={})",
            source_lang,
            base64_audio.len()
        );
    }

    let service_id = config.service_id_for(source_lang).map(str::to_string);
    if service_id.is_none() && config.require_service_id {
        return Err(BhashiniError::Config(format!(
            "no ASR service id configured for language '{}'",
            source_lang
        )));
    }

    debug!(
        "Payload: task=asr source_lang={} service_id={:?} audio_len={}",
        source_lang,
        service_id,
        base64_audio.len()
    );

    Ok(ASRPayload {
        pipeline_tasks: vec![PipelineTask {
            task_type: ASR_TASK_TYPE.to_string(),
            config: TaskConfig {
                language: LanguageConfig {
                    source_language: source_lang.to_string(),
                },
                service_id,
                audio_format: config.audio_format.clone(),
                sampling_rate: config.sampling_rate,
            },
        }],
        input_data: InputData {
            audio: vec![AudioInput {
                audio_content: base64_audio.to_string(),
            }],
        },
    })
}
