use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::config_manager::main::Config;

/// Read a configuration file and replace `${VAR_NAME}` with environment values.
/// Unset variables are left as written.
pub fn read_config_text(config_path: &str) -> Result<String> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let content = load_text_file(config_path)?;
    if content.trim().is_empty() {
        anyhow::bail!("Configuration file is empty: {}", config_path);
    }

    substitute_env_vars(&content)
}

pub fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| {
            debug!("Environment variable {} not set, keeping placeholder", &caps[1]);
            caps[0].to_string()
        })
    });
    Ok(replaced.into_owned())
}

/// Validate configuration data against the Config model
pub fn validate_config(config_data: &Value) -> Result<Config> {
    let config: Config = serde_json::from_value(config_data.clone())?;
    if config.api.inference_url.trim().is_empty() {
        anyhow::bail!("api.inference_url must not be empty");
    }
    Ok(config)
}

/// Decode a file as UTF-8, dropping a leading BOM if present
pub fn load_text_file(file_path: &str) -> Result<String> {
    let bytes = fs::read(file_path)?;
    let (cow, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
    if had_errors {
        anyhow::bail!("Configuration file is not valid UTF-8: {}", file_path);
    }
    Ok(cow.into_owned())
}
