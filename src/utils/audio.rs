use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Read an audio file and base64-encode it for `audioContent`
pub fn encode_audio_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read audio file: {}", path.display()))?;
    if bytes.is_empty() {
        anyhow::bail!("Audio file is empty: {}", path.display());
    }
    Ok(STANDARD.encode(bytes))
}
