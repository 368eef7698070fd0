//! Test utilities.
//!
//! Shared helpers used across the unit test modules.
#![cfg(test)]

use serde_json::Value;

use crate::resolve::TranslationMap;

/// Builds a translation map from `(language, text)` pairs.
pub(crate) fn translation_map(entries: &[(&str, &str)]) -> TranslationMap {
    entries
        .iter()
        .map(|(language, text)| ((*language).to_string(), Value::String((*text).to_string())))
        .collect()
}
