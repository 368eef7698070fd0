//! Per-record state for one translatable column.
//!
//! A [`TranslatedField`] is what a record type embeds for each translated
//! column. It carries the presentation value resolved for the active
//! language, the raw translation mapping as decoded from storage, and the
//! snapshot that recognizes untouched fields at save time. Loading and
//! saving are explicit: the hosting store calls
//! [`load`](TranslatedField::load) with the decoded column content and
//! [`prepare_for_write`](TranslatedField::prepare_for_write) to obtain the
//! content to encode back.

use serde_json::Value;

use crate::context::LanguageContext;
use crate::error::TranslationError;
use crate::resolve::{
    TranslationMap,
    merge_translation,
    resolve_translation,
};

/// One translatable column of a loaded record.
///
/// The field exposes two read paths: [`value`](Self::value) returns the
/// scalar resolved for the active language, [`raw`](Self::raw) returns the
/// full mapping as decoded from storage. Assignments go through
/// [`set`](Self::set) or [`clear`](Self::clear) and reach storage only when
/// [`prepare_for_write`](Self::prepare_for_write) runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslatedField {
    /// The resolved or assigned presentation value.
    value: Option<Value>,

    /// The full mapping as decoded from storage. Absent for columns that
    /// never held mapping content.
    raw: Option<TranslationMap>,

    /// The value most recently resolved from or written to storage.
    snapshot: Option<Value>,
}

impl TranslatedField {
    /// Creates an empty field, as embedded in a record never loaded from
    /// storage.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None, raw: None, snapshot: None }
    }

    /// Builds the field from the decoded content of a stored column.
    ///
    /// Mapping content is resolved for the context's active language, with a
    /// fallback to `default_language`; the mapping itself stays available
    /// through [`raw`](Self::raw). Non-mapping content (legacy, unmigrated
    /// columns) passes through unresolved and has no raw view.
    ///
    /// # Errors
    /// [`TranslationError::NoActiveLanguage`] if the stored content is a
    /// mapping and the context reports no active language.
    pub fn load(
        stored: Option<Value>,
        ctx: &dyn LanguageContext,
        default_language: &str,
    ) -> Result<Self, TranslationError> {
        let resolved = resolve_translation(stored.as_ref(), ctx, default_language)?;

        let raw = match stored {
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                tracing::debug!("Stored content is not a translation mapping; passing it through");
                None
            }
            None => None,
        };

        Ok(Self { value: resolved.clone(), raw, snapshot: resolved })
    }

    /// Returns the value resolved for the active language, or the value
    /// assigned since loading.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Returns the full translation mapping as currently held in memory.
    ///
    /// `None` for columns that never held mapping content, as opposed to
    /// `Some` of an empty mapping for columns stored as `{}`.
    #[must_use]
    pub const fn raw(&self) -> Option<&TranslationMap> {
        self.raw.as_ref()
    }

    /// Assigns a new value to the column.
    ///
    /// A scalar targets only the active language's entry; a mapping replaces
    /// every translation at once. Storage is not touched until
    /// [`prepare_for_write`](Self::prepare_for_write).
    pub fn set(&mut self, value: impl Into<Value>) {
        self.value = Some(value.into());
    }

    /// Marks the column to be emptied on the next write.
    pub fn clear(&mut self) {
        self.value = Some(Value::Null);
    }

    /// Computes the content to encode into the stored column.
    ///
    /// An untouched field (the in-memory value still equals the last loaded
    /// or written one) persists the raw mapping exactly as decoded. An
    /// assigned mapping replaces the stored translations wholesale; an
    /// assigned scalar is merged under the active language without
    /// discarding other languages' entries. A null assignment empties the
    /// column and resets the field. `None` means the column stores nothing.
    ///
    /// A failed call leaves the field unchanged.
    ///
    /// # Errors
    /// [`TranslationError::NoActiveLanguage`] if a scalar is assigned and
    /// the context reports no active language.
    pub fn prepare_for_write(
        &mut self,
        ctx: &dyn LanguageContext,
    ) -> Result<Option<Value>, TranslationError> {
        if self.value == self.snapshot {
            if let Some(raw) = &self.raw {
                return Ok(Some(Value::Object(raw.clone())));
            }
            return Ok(self.value.clone());
        }

        let Some(value) = &self.value else {
            return Ok(None);
        };

        if value.is_null() {
            tracing::debug!("Null assignment empties the stored column");
            *self = Self::new();
            return Ok(None);
        }

        // The merge consumes the raw mapping, so refuse before taking it.
        if !value.is_object() && ctx.active_language().is_none() {
            return Err(TranslationError::NoActiveLanguage);
        }

        let merged = merge_translation(value.clone(), self.raw.take(), ctx)?;
        tracing::debug!("Prepared {} translation(s) for write", merged.len());
        self.snapshot.clone_from(&self.value);
        self.raw = Some(merged.clone());

        Ok(Some(Value::Object(merged)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::context::FixedLanguage;
    use crate::test_utils::translation_map;

    fn stored_flavours() -> Value {
        json!({"en-gb": "vanilla", "fr-fr": "vanille"})
    }

    #[googletest::test]
    fn load_resolves_the_active_language() {
        let ctx = FixedLanguage::new("fr-fr");

        let field = TranslatedField::load(Some(stored_flavours()), &ctx, "en-gb").unwrap();

        expect_that!(field.value(), some(eq(&json!("vanille"))));
        expect_that!(
            field.raw(),
            some(eq(&translation_map(&[("en-gb", "vanilla"), ("fr-fr", "vanille")])))
        );
    }

    #[googletest::test]
    fn load_without_stored_content_is_empty() {
        let ctx = FixedLanguage::new("en-gb");

        let field = TranslatedField::load(None, &ctx, "en-gb").unwrap();

        expect_that!(field.value(), none());
        expect_that!(field.raw(), none());
    }

    #[googletest::test]
    fn load_keeps_legacy_content_without_a_raw_view() {
        let ctx = FixedLanguage::new("en-gb");

        let field = TranslatedField::load(Some(json!("legacy flavour")), &ctx, "en-gb").unwrap();

        expect_that!(field.value(), some(eq(&json!("legacy flavour"))));
        expect_that!(field.raw(), none());
    }

    #[googletest::test]
    fn load_requires_an_active_language_for_mappings() {
        let ctx = FixedLanguage::disabled();

        let result = TranslatedField::load(Some(stored_flavours()), &ctx, "en-gb");

        assert_eq!(result, Err(TranslationError::NoActiveLanguage));
    }

    #[googletest::test]
    fn untouched_save_persists_raw_as_decoded() {
        // No entry for the active language and none for the default: the
        // resolved value is empty, but saving must not lose the mapping.
        let ctx = FixedLanguage::new("se-se");
        let mut field =
            TranslatedField::load(Some(json!({"pt-pt": "baunilha"})), &ctx, "en-gb").unwrap();

        expect_that!(field.value(), none());

        let prepared = field.prepare_for_write(&ctx).unwrap();

        assert_that!(prepared, eq(&Some(json!({"pt-pt": "baunilha"}))));
    }

    #[googletest::test]
    fn untouched_empty_mapping_round_trips() {
        let ctx = FixedLanguage::new("en-gb");
        let mut field = TranslatedField::load(Some(json!({})), &ctx, "en-gb").unwrap();

        let prepared = field.prepare_for_write(&ctx).unwrap();

        // A stored empty mapping is not the same as a column never set.
        assert_that!(prepared, eq(&Some(json!({}))));
    }

    #[googletest::test]
    fn never_loaded_field_prepares_to_nothing() {
        let ctx = FixedLanguage::new("en-gb");
        let mut field = TranslatedField::new();

        let prepared = field.prepare_for_write(&ctx).unwrap();

        expect_that!(prepared, none());
    }

    #[googletest::test]
    fn set_scalar_merges_under_the_active_language() {
        let ctx = FixedLanguage::new("fr-fr");
        let mut field =
            TranslatedField::load(Some(json!({"en-gb": "vanilla"})), &ctx, "en-gb").unwrap();

        field.set("vanille");
        let prepared = field.prepare_for_write(&ctx).unwrap();

        assert_that!(prepared, eq(&Some(json!({"en-gb": "vanilla", "fr-fr": "vanille"}))));
        expect_that!(field.value(), some(eq(&json!("vanille"))));
        expect_that!(
            field.raw(),
            some(eq(&translation_map(&[("en-gb", "vanilla"), ("fr-fr", "vanille")])))
        );
    }

    #[googletest::test]
    fn set_scalar_on_a_fresh_field_creates_the_first_entry() {
        let ctx = FixedLanguage::new("en-gb");
        let mut field = TranslatedField::new();

        field.set("vanilla");
        let prepared = field.prepare_for_write(&ctx).unwrap();

        assert_that!(prepared, eq(&Some(json!({"en-gb": "vanilla"}))));
    }

    #[googletest::test]
    fn set_full_mapping_replaces_previous_translations() {
        let ctx = FixedLanguage::new("en-gb");
        let mut field = TranslatedField::load(Some(stored_flavours()), &ctx, "en-gb").unwrap();

        field.set(json!({"en-gb": "chocolate", "se-se": "choklad"}));
        let prepared = field.prepare_for_write(&ctx).unwrap();

        assert_that!(prepared, eq(&Some(json!({"en-gb": "chocolate", "se-se": "choklad"}))));
        expect_that!(
            field.raw(),
            some(eq(&translation_map(&[("en-gb", "chocolate"), ("se-se", "choklad")])))
        );
    }

    #[googletest::test]
    fn preparing_twice_without_changes_yields_the_same_mapping() {
        let ctx = FixedLanguage::new("fr-fr");
        let mut field =
            TranslatedField::load(Some(json!({"en-gb": "vanilla"})), &ctx, "en-gb").unwrap();

        field.set("vanille");
        let first = field.prepare_for_write(&ctx).unwrap();
        let second = field.prepare_for_write(&ctx).unwrap();

        assert_that!(second, eq(&first));
    }

    #[googletest::test]
    fn reassigning_the_resolved_value_is_a_no_op() {
        let ctx = FixedLanguage::new("fr-fr");
        let mut field = TranslatedField::load(Some(stored_flavours()), &ctx, "en-gb").unwrap();

        field.set("vanille");
        let prepared = field.prepare_for_write(&ctx).unwrap();

        assert_that!(prepared, eq(&Some(stored_flavours())));
    }

    #[googletest::test]
    fn failed_prepare_leaves_the_field_untouched() {
        let english = FixedLanguage::new("en-gb");
        let mut field =
            TranslatedField::load(Some(json!({"en-gb": "vanilla"})), &english, "en-gb").unwrap();

        field.set("vanille");
        let result = field.prepare_for_write(&FixedLanguage::disabled());

        assert_eq!(result, Err(TranslationError::NoActiveLanguage));
        expect_that!(field.raw(), some(eq(&translation_map(&[("en-gb", "vanilla")]))));
        expect_that!(field.value(), some(eq(&json!("vanille"))));

        let prepared = field.prepare_for_write(&FixedLanguage::new("fr-fr")).unwrap();
        assert_that!(prepared, eq(&Some(json!({"en-gb": "vanilla", "fr-fr": "vanille"}))));
    }

    #[googletest::test]
    fn clearing_empties_the_column_and_resets_the_field() {
        let ctx = FixedLanguage::new("en-gb");
        let mut field = TranslatedField::load(Some(stored_flavours()), &ctx, "en-gb").unwrap();

        field.clear();
        let prepared = field.prepare_for_write(&ctx).unwrap();

        expect_that!(prepared, none());
        expect_that!(field.value(), none());
        expect_that!(field.raw(), none());
        expect_that!(field.prepare_for_write(&ctx).unwrap(), none());
    }

    #[rstest]
    #[case::string(json!("legacy flavour"))]
    #[case::number(json!(42))]
    fn legacy_content_saves_back_verbatim(#[case] stored: Value) {
        let ctx = FixedLanguage::new("en-gb");
        let mut field = TranslatedField::load(Some(stored.clone()), &ctx, "en-gb").unwrap();

        let prepared = field.prepare_for_write(&ctx).unwrap();

        assert_that!(prepared, eq(&Some(stored)));
    }

    #[googletest::test]
    fn assigning_after_legacy_content_starts_a_fresh_mapping() {
        let ctx = FixedLanguage::new("en-gb");
        let mut field =
            TranslatedField::load(Some(json!("legacy flavour")), &ctx, "en-gb").unwrap();

        field.set("vanilla");
        let prepared = field.prepare_for_write(&ctx).unwrap();

        assert_that!(prepared, eq(&Some(json!({"en-gb": "vanilla"}))));
    }

    #[googletest::test]
    fn resolved_null_entry_still_persists_the_mapping() {
        let ctx = FixedLanguage::new("en-gb");
        let stored = json!({"en-gb": null, "fr-fr": "vanille"});
        let mut field = TranslatedField::load(Some(stored.clone()), &ctx, "en-gb").unwrap();

        expect_that!(field.value(), some(eq(&Value::Null)));

        let prepared = field.prepare_for_write(&ctx).unwrap();

        assert_that!(prepared, eq(&Some(stored)));
    }
}
