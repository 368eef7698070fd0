//! Settings for translated column resolution.
mod loader;
mod manager;
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    TranslationSettings,
    ValidationError,
};
