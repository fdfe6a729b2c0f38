//! Client for the Bhashini speech-recognition inference pipeline.
//!
//! ```no_run
//! use bhashini_asr::{ASRClient, ApiConfig, ASRConfig, PipelineServiceClient};
//!
//! # async fn run() -> bhashini_asr::Result<()> {
//! let transport = PipelineServiceClient::new(ApiConfig::new(
//!     "https://dhruva-api.bhashini.gov.in/services/inference/pipeline",
//!     "inference-api-key",
//! ))?;
//! let asr = ASRClient::new(transport, ASRConfig::default());
//! let text = asr.recognize("hi", "UklGRiQAAABXQVZF...").await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

pub mod asr;
pub mod config_manager;
pub mod errors;
pub mod pipeline_service;
pub mod utils;

pub use asr::{ASRClient, ASRFactory, ASRInterface, ASRPayload, Recognition};
pub use config_manager::{ASRConfig, ApiConfig, Config};
pub use errors::{BhashiniError, ErrorKind, InvalidStructure, Result};
pub use pipeline_service::{PipelineServiceClient, Transport};
