//! Locale detection — pick the initial UI language on first run.
//!
//! The environment locale's primary subtag is matched case-insensitively
//! against the supported languages. Detection only runs when no settings
//! were ever persisted; the caller falls back to English when nothing
//! matches.

use crate::types::settings::Language;


/// Match a locale identifier like `de-AT`, `tr_TR.UTF-8` or `EN` against
/// the supported languages by primary subtag.
pub fn detect_language(locale: &str) -> Option<Language> {
    let primary = locale
        .split(&['-', '_', '.'][..])
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    match primary.as_str() {
        "tr" => Some(Language::Tr),
        "en" => Some(Language::En),
        "ru" => Some(Language::Ru),
        "de" => Some(Language::De),
        _ => None,
    }
}


/// The process locale, from the usual environment variables in
/// precedence order. `None` when none of them is set to anything.
pub fn system_locale() -> Option<String> {
    for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_locale_matches_primary_subtag() {
        assert_eq!(detect_language("de-AT"), Some(Language::De));
        assert_eq!(detect_language("en-US"), Some(Language::En));
    }

    #[test]
    fn posix_locale_with_encoding() {
        assert_eq!(detect_language("tr_TR.UTF-8"), Some(Language::Tr));
        assert_eq!(detect_language("ru_RU"), Some(Language::Ru));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(detect_language("DE"), Some(Language::De));
        assert_eq!(detect_language("En-GB"), Some(Language::En));
    }

    #[test]
    fn unsupported_language_is_none() {
        assert_eq!(detect_language("fr-FR"), None);
        assert_eq!(detect_language("ja_JP.UTF-8"), None);
    }

    #[test]
    fn degenerate_inputs_are_none() {
        assert_eq!(detect_language(""), None);
        assert_eq!(detect_language("C"), None);
        assert_eq!(detect_language("POSIX"), None);
    }
}
