//! Read/write resolution for translated column values.
//!
//! A translated column stores a JSON mapping from normalized language code to
//! translated value. [`resolve_translation`] collapses that mapping to the
//! single value the active language should see; [`merge_translation`] expands
//! a newly assigned value back into the full mapping to persist, without
//! discarding other languages' entries.

use serde_json::Value;

use crate::context::LanguageContext;
use crate::error::TranslationError;
use crate::lang::normalize_language_code;

/// The full raw content of one translatable column: language code → value.
pub type TranslationMap = serde_json::Map<String, Value>;

/// Resolves the stored content of a translated column to the presentation
/// value for the active language.
///
/// Stored content that is not a mapping (legacy, unmigrated data) is returned
/// unchanged without consulting the context. For a mapping, the entry for the
/// active language wins, verbatim; otherwise the entry for `default_language`
/// (normalized at the point of use) is returned, and a miss on both is a
/// normal "no translation available" outcome, not an error.
///
/// ```
/// use serde_json::json;
/// use translated_json::context::FixedLanguage;
/// use translated_json::resolve::resolve_translation;
///
/// let stored = json!({"en-gb": "vanilla", "fr-fr": "vanille"});
/// let ctx = FixedLanguage::new("fr-fr");
///
/// let resolved = resolve_translation(Some(&stored), &ctx, "en-gb")?;
/// assert_eq!(resolved, Some(json!("vanille")));
/// # Ok::<(), translated_json::error::TranslationError>(())
/// ```
///
/// # Errors
/// [`TranslationError::NoActiveLanguage`] if the stored content is a mapping
/// and the context reports no active language.
pub fn resolve_translation(
    stored: Option<&Value>,
    ctx: &dyn LanguageContext,
    default_language: &str,
) -> Result<Option<Value>, TranslationError> {
    let Some(value) = stored else {
        return Ok(None);
    };

    let Value::Object(map) = value else {
        return Ok(Some(value.clone()));
    };

    let active = ctx.active_language().ok_or(TranslationError::NoActiveLanguage)?;

    if let Some(entry) = map.get(active) {
        return Ok(Some(entry.clone()));
    }

    Ok(map.get(&normalize_language_code(default_language)).cloned())
}

/// Merges a newly assigned value into the translations to persist.
///
/// A mapping input names every translation explicitly and replaces the stored
/// map wholesale; the active language is not consulted. A scalar input sets
/// only the active language's entry: the operation takes ownership of the
/// previous map, inserts the entry, and returns the updated map, so unrelated
/// languages survive the write. With no previous map, a fresh single-entry
/// mapping is returned.
///
/// # Errors
/// [`TranslationError::NoActiveLanguage`] if `new_value` is a scalar and the
/// context reports no active language.
pub fn merge_translation(
    new_value: Value,
    previous: Option<TranslationMap>,
    ctx: &dyn LanguageContext,
) -> Result<TranslationMap, TranslationError> {
    if let Value::Object(map) = new_value {
        return Ok(map);
    }

    let active = ctx.active_language().ok_or(TranslationError::NoActiveLanguage)?;

    let mut map = previous.unwrap_or_default();
    map.insert(active.to_string(), new_value);
    Ok(map)
}
