//! Configuration file loading.

use std::path::Path;

use super::{
    ConfigError,
    TranslationSettings,
};

/// Loads settings from a configuration root.
///
/// Looks for a `.translated-json.json` file.
///
/// # Arguments
/// * `config_root` - Directory holding the configuration file
///
/// # Returns
/// - `Ok(Some(settings))`: file found and parsed
/// - `Ok(None)`: no configuration file present
/// - `Err(ConfigError)`: read or parse failure
///
/// # Errors
/// - File read error
/// - JSON parse error
pub(super) fn load_from_root(
    config_root: &Path,
) -> Result<Option<TranslationSettings>, ConfigError> {
    let config_path = config_root.join(".translated-json.json");

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: TranslationSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
