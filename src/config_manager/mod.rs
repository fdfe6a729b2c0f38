pub mod api;
pub mod asr;
pub mod main;
pub mod utils;

pub use api::ApiConfig;
pub use asr::ASRConfig;
pub use main::Config;
