// SPDX-License-Identifier: MPL-2.0
//! The set of languages the storefront ships translations for.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// A supported UI language.
///
/// Region or script qualified codes resolve to their base language, so
/// `pt-BR` and `zh-Hans-CN` select [`Language::Pt`] and [`Language::Zh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Ru,
    Zh,
    Ja,
    Ko,
    Ar,
}

impl Language {
    /// All supported languages, in selector order.
    pub const ALL: [Language; 11] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::It,
        Language::Pt,
        Language::Ru,
        Language::Zh,
        Language::Ja,
        Language::Ko,
        Language::Ar,
    ];

    /// ISO 639-1 code, also the name of the `.ftl` resource.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Ru => "ru",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Ko => "ko",
            Language::Ar => "ar",
        }
    }

    /// Name of the language written in that language, shown in the selector.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::It => "Italiano",
            Language::Pt => "Português",
            Language::Ru => "Русский",
            Language::Zh => "中文",
            Language::Ja => "日本語",
            Language::Ko => "한국어",
            Language::Ar => "العربية",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Parses a locale string such as `fr`, `de-AT`, `pt_BR.UTF-8`.
    ///
    /// Returns `None` for malformed or unsupported codes.
    pub fn from_code(code: &str) -> Option<Self> {
        // POSIX locales carry an encoding/modifier suffix and use '_'.
        let trimmed = code
            .trim()
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('_', "-");
        let langid = trimmed.parse::<LanguageIdentifier>().ok()?;
        let base = langid.language.as_str().to_ascii_lowercase();
        Language::ALL.into_iter().find(|lang| lang.code() == base)
    }

    pub fn langid(self) -> LanguageIdentifier {
        // Every code above is a valid BCP-47 primary language subtag.
        self.code().parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_for_every_language() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
            assert_eq!(lang.langid().to_string(), lang.code());
        }
    }

    #[test]
    fn region_and_script_subtags_match_base_language() {
        assert_eq!(Language::from_code("fr-CA"), Some(Language::Fr));
        assert_eq!(Language::from_code("zh-Hans-CN"), Some(Language::Zh));
        assert_eq!(Language::from_code("PT-br"), Some(Language::Pt));
    }

    #[test]
    fn posix_locale_strings_are_accepted() {
        assert_eq!(Language::from_code("de_AT.UTF-8"), Some(Language::De));
        assert_eq!(Language::from_code("ja_JP@calendar"), Some(Language::Ja));
    }

    #[test]
    fn unsupported_codes_are_not_recognized() {
        assert_eq!(Language::from_code("nl"), None);
        assert_eq!(Language::from_code("not a locale!"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("sv-SE"), None);
    }

    #[test]
    fn only_arabic_is_right_to_left() {
        let rtl: Vec<_> = Language::ALL.into_iter().filter(|l| l.is_rtl()).collect();
        assert_eq!(rtl, vec![Language::Ar]);
    }
}
