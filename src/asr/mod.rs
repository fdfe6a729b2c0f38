pub mod interface;
pub mod payload;
pub mod response;
pub mod client;
pub mod factory;

pub use interface::ASRInterface;
pub use payload::{asr_payload, ASRPayload};
pub use response::{PipelineEnvelope, Recognition};
pub use client::ASRClient;
pub use factory::ASRFactory;
