//! Language-code normalization.
//!
//! Stored translation maps use one key convention everywhere: lowercase with
//! `-` as the subtag separator (e.g. `en-gb`, `pt-br`). Codes arriving from
//! the hosting application may use either separator and any casing.

/// Normalizes a language code (lowercase and replace `_` with `-`).
///
/// No syntax validation is performed; an unknown code simply never matches a
/// map entry.
#[must_use]
pub fn normalize_language_code(code: &str) -> String {
    code.to_lowercase().replace('_', "-")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("en", "en")]
    #[case::already_normalized("en-gb", "en-gb")]
    #[case::underscore_separator("en_gb", "en-gb")]
    #[case::uppercase_region("en-GB", "en-gb")]
    #[case::uppercase_underscore("pt_BR", "pt-br")]
    #[case::all_uppercase("FR-FR", "fr-fr")]
    #[case::three_subtags("az_Cyrl_AZ", "az-cyrl-az")]
    #[case::empty("", "")]
    fn test_normalize_language_code(#[case] code: &str, #[case] expected: &str) {
        assert_eq!(normalize_language_code(code), expected);
    }
}
