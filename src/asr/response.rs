use serde::Deserialize;

use crate::errors::{BhashiniError, InvalidStructure, Result};

/// Top-level body returned by the inference pipeline
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineEnvelope {
    pub pipeline_response: Option<Vec<PipelineResponse>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineResponse {
    #[serde(default)]
    pub output: Vec<Output>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Output {
    pub source: Option<String>,
}

/// Result of validating an envelope once, at the client boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    Success { text: String },
    Invalid(InvalidStructure),
}

impl Recognition {
    pub fn into_result(self) -> Result<String> {
        match self {
            Recognition::Success { text } => Ok(text),
            Recognition::Invalid(reason) => Err(BhashiniError::InvalidResponse(reason)),
        }
    }
}

impl PipelineEnvelope {
    /// Pick `pipelineResponse[0].output[0].source`
    pub fn into_recognition(self) -> Recognition {
        let Some(responses) = self.pipeline_response else {
            return Recognition::Invalid(InvalidStructure::MissingPipelineResponse);
        };
        let Some(first) = responses.into_iter().next() else {
            return Recognition::Invalid(InvalidStructure::EmptyPipelineResponse);
        };
        let Some(output) = first.output.into_iter().next() else {
            return Recognition::Invalid(InvalidStructure::EmptyOutput);
        };
        match output.source {
            Some(text) => Recognition::Success { text },
            None => Recognition::Invalid(InvalidStructure::MissingSource),
        }
    }
}

impl From<serde_json::Value> for Recognition {
    fn from(body: serde_json::Value) -> Self {
        match serde_json::from_value::<PipelineEnvelope>(body) {
            Ok(envelope) => envelope.into_recognition(),
            Err(e) => Recognition::Invalid(InvalidStructure::Undecodable(e.to_string())),
        }
    }
}
