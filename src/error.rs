use thiserror::Error;

/// Defines errors that may occur while resolving or merging translated values
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationError {
    /// The active-language mechanism is not enabled in the current context.
    ///
    /// Raised when resolution or a scalar write needs the active language and
    /// the [`LanguageContext`](crate::context::LanguageContext) reports none.
    /// This is a setup problem in the hosting application, not a missing
    /// translation, and is never retryable.
    #[error("no active language is configured; enable translation support to use translated columns")]
    NoActiveLanguage,
}
