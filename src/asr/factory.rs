use std::sync::Arc;
use tracing::info;

use super::client::ASRClient;
use super::interface::ASRInterface;
use crate::config_manager::Config;
use crate::errors::Result;
use crate::pipeline_service::PipelineServiceClient;

/// Factory for creating ASR clients
pub struct ASRFactory;

impl ASRFactory {
    /// Create an ASR client backed by the Bhashini inference pipeline
    ///
    /// # Arguments
    /// * `config` - Client configuration; `api` selects the endpoint, `asr` the task settings
    ///
    /// # Returns
    /// Shared ASRInterface implementation
    pub fn create_asr(config: &Config) -> Result<Arc<dyn ASRInterface>> {
        let transport = PipelineServiceClient::new(config.api.clone())?;
        info!(
            "Initializing Bhashini ASR: endpoint={}, languages with service ids={}",
            transport.inference_url(),
            config.asr.service_ids.len()
        );

        Ok(Arc::new(ASRClient::new(transport, config.asr.clone())))
    }
}
