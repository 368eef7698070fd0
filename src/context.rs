//! The active-language boundary.
//!
//! The language a request operates in is owned by the hosting application
//! (an HTTP middleware, a CLI flag, a session setting). This crate never
//! reads ambient process state for it; every operation that needs the active
//! language takes a [`LanguageContext`] explicitly.

use crate::lang::normalize_language_code;

/// Read access to the language the current request/process operates in.
pub trait LanguageContext {
    /// Returns the normalized active language code, or `None` when
    /// translation support is not enabled in this context.
    fn active_language(&self) -> Option<&str>;
}

/// A context pinned to a single language.
///
/// This is the plain implementation for applications that decide the language
/// once per request, and for tests. The code is normalized on construction so
/// lookups against stored maps never have to re-normalize.
///
/// ```
/// use translated_json::context::{FixedLanguage, LanguageContext};
///
/// let ctx = FixedLanguage::new("en_GB");
/// assert_eq!(ctx.active_language(), Some("en-gb"));
///
/// let disabled = FixedLanguage::disabled();
/// assert_eq!(disabled.active_language(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLanguage {
    code: Option<String>,
}

impl FixedLanguage {
    /// Creates a context pinned to `code`, normalizing it.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self { code: Some(normalize_language_code(code)) }
    }

    /// Creates a context with translation support disabled.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { code: None }
    }
}

impl LanguageContext for FixedLanguage {
    fn active_language(&self) -> Option<&str> {
        self.code.as_deref()
    }
}
