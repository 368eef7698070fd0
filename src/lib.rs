//! translated-json
//!
//! Language-aware JSON column values for record stores: one column holds a
//! mapping from language code to translated value, reads collapse it to the
//! value for the active language (falling back to a configured default), and
//! writes merge new values back in without dropping other languages.
//!
//! ```
//! use serde_json::json;
//! use translated_json::{FixedLanguage, TranslatedField};
//!
//! let english = FixedLanguage::new("en-gb");
//! let mut flavour = TranslatedField::new();
//! flavour.set("vanilla");
//! let stored = flavour.prepare_for_write(&english)?;
//! assert_eq!(stored, Some(json!({"en-gb": "vanilla"})));
//!
//! let french = FixedLanguage::new("fr-fr");
//! let reloaded = TranslatedField::load(stored, &french, "en-gb")?;
//! assert_eq!(reloaded.value(), Some(&json!("vanilla")));
//! # Ok::<(), translated_json::TranslationError>(())
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod field;
pub mod lang;
pub mod resolve;

mod test_utils;

pub use config::{
    ConfigManager,
    TranslationSettings,
};
pub use context::{
    FixedLanguage,
    LanguageContext,
};
pub use error::TranslationError;
pub use field::TranslatedField;
pub use resolve::{
    TranslationMap,
    merge_translation,
    resolve_translation,
};
