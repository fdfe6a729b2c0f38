use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::asr::payload::ASRPayload;
use crate::config_manager::ApiConfig;
use crate::errors::{BhashiniError, InvalidStructure, Result};

/// Sends one pipeline request and hands back the raw JSON body.
///
/// Anything that is not a successful HTTP exchange is reported as a
/// transport error; interpreting the body is left to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, payload: &ASRPayload) -> Result<serde_json::Value>;
}

/// reqwest-backed client for the Bhashini inference pipeline
#[derive(Debug, Clone)]
pub struct PipelineServiceClient {
    client: Client,
    config: ApiConfig,
}

impl PipelineServiceClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    pub fn inference_url(&self) -> &str {
        &self.config.inference_url
    }
}

#[async_trait]
impl Transport for PipelineServiceClient {
    async fn post(&self, payload: &ASRPayload) -> Result<serde_json::Value> {
        let mut request = self
            .client
            .post(&self.config.inference_url)
            .header(reqwest::header::AUTHORIZATION, &self.config.api_key)
            .json(payload);

        if let Some(user_id) = &self.config.user_id {
            request = request.header("userID", user_id);
        }
        if let Some(ulca_api_key) = &self.config.ulca_api_key {
            request = request.header("ulcaApiKey", ulca_api_key);
        }

        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            debug!("Bhashini API response error ({}): {}", status, body);
            return Err(BhashiniError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("API response data: {}", body);
        serde_json::from_str(&body)
            .map_err(|e| BhashiniError::InvalidResponse(InvalidStructure::Undecodable(e.to_string())))
    }
}
