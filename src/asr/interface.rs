use async_trait::async_trait;

use crate::errors::Result;

/// Speech recognition over base64-encoded audio
#[async_trait]
pub trait ASRInterface: Send + Sync {
    /// Recognize the speech in `base64_audio`, spoken in `source_lang`
    ///
    /// # Arguments
    /// * `source_lang` - Language code of the audio, e.g. `"hi"`
    /// * `base64_audio` - Audio file contents, base64-encoded
    ///
    /// # Returns
    /// The recognized text
    async fn recognize(&self, source_lang: &str, base64_audio: &str) -> Result<String>;
}
