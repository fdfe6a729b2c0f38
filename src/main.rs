use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bhashini_asr::utils::encode_audio_file;
use bhashini_asr::{ASRFactory, ASRInterface, Config};

const USAGE: &str = "usage: bhashini-asr <source-lang> <audio-file> [config-path]";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bhashini_asr=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let source_lang = args.next().ok_or_else(|| anyhow::anyhow!(USAGE))?;
    let audio_path = args.next().ok_or_else(|| anyhow::anyhow!(USAGE))?;

    let config_paths: Vec<String> = vec![
        args.next(),
        std::env::var("BHASHINI_CONFIG").ok(),
        Some("bhashini.jsonld".to_string()),
        Some("bhashini.json".to_string()),
        Some("bhashini.yaml".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                info!("Loaded configuration from: {}", path);
                config = Some(cfg);
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }

    let config = config.ok_or_else(|| {
        anyhow::anyhow!("Could not find config file. Tried: {:?}", config_paths)
    })?;

    let audio = encode_audio_file(&audio_path)?;
    info!("Recognizing {} ({} base64 bytes) as '{}'", audio_path, audio.len(), source_lang);

    let asr = ASRFactory::create_asr(&config)?;
    let text = asr.recognize(&source_lang, &audio).await?;
    println!("{}", text);

    Ok(())
}
