//! Settings management.

use std::path::PathBuf;

use super::{
    ConfigError,
    TranslationSettings,
    loader,
};

/// Owns the settings the resolution operations read.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Settings currently in effect
    current_settings: TranslationSettings,

    /// Root directory the settings were loaded from
    config_root: Option<PathBuf>,
}

impl ConfigManager {
    /// Creates a manager with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: TranslationSettings::default(), config_root: None }
    }

    /// Loads settings from a configuration root.
    ///
    /// Falls back to the defaults when `config_root` is `None` or holds no
    /// configuration file.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load_settings(&mut self, config_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings from root: {:?}", config_root);

        let settings = if let Some(root) = &config_root {
            loader::load_from_root(root)?.map_or_else(TranslationSettings::default, |loaded| {
                tracing::debug!("Loaded settings: {:?}", loaded);
                loaded
            })
        } else {
            TranslationSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.config_root = config_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// Replaces the settings in effect.
    ///
    /// # Errors
    /// - Validation error
    pub fn update_settings(&mut self, new_settings: TranslationSettings) -> Result<(), ConfigError> {
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// Returns the settings currently in effect.
    #[must_use]
    pub const fn settings(&self) -> &TranslationSettings {
        &self.current_settings
    }

    /// Returns the configured fallback language.
    #[must_use]
    pub fn default_language(&self) -> &str {
        &self.current_settings.default_language
    }

    /// Returns the configuration root, if settings were loaded from one.
    #[must_use]
    pub const fn config_root(&self) -> Option<&PathBuf> {
        self.config_root.as_ref()
    }
}
