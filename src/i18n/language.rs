// SPDX-License-Identifier: PMPL-1.0-or-later

//! The closed set of languages the action labels are authored in.

use crate::error::{Error, Result};
use crate::i18n::iso639::{is_valid_iso639_1, language_name};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of supported languages.
pub const LANGUAGE_COUNT: usize = 9;

/// Supported languages, in the platform's numbering order (1..=9).
///
/// Exactly one of them is active for a run of the platform; the others are
/// still compiled in so mail and per-recipient text can use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    Catalan,
    German,
    English,
    Spanish,
    French,
    Guarani,
    Italian,
    Polish,
    Portuguese,
}

impl Language {
    /// ISO 639-1 two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Language::Catalan => "ca",
            Language::German => "de",
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Guarani => "gn",
            Language::Italian => "it",
            Language::Polish => "pl",
            Language::Portuguese => "pt",
        }
    }

    /// The platform's numeric language code, `1..=9`.
    pub fn number(self) -> u8 {
        self.slot() as u8 + 1
    }

    /// Zero-based position, used to index per-language columns.
    pub(crate) fn slot(self) -> usize {
        self as usize
    }

    /// Parse an ISO 639-1 code. Case-sensitive, codes are lowercase.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "ca" => Some(Language::Catalan),
            "de" => Some(Language::German),
            "en" => Some(Language::English),
            "es" => Some(Language::Spanish),
            "fr" => Some(Language::French),
            "gn" => Some(Language::Guarani),
            "it" => Some(Language::Italian),
            "pl" => Some(Language::Polish),
            "pt" => Some(Language::Portuguese),
            _ => None,
        }
    }

    /// Parse a platform language number. `0` means "unknown" on the
    /// platform and is rejected like any other out-of-range value.
    pub fn from_number(number: u8) -> Option<Language> {
        match number {
            1..=9 => Some(Self::all()[number as usize - 1]),
            _ => None,
        }
    }

    /// All supported languages, in platform order.
    pub fn all() -> &'static [Language; LANGUAGE_COUNT] {
        &[
            Language::Catalan,
            Language::German,
            Language::English,
            Language::Spanish,
            Language::French,
            Language::Guarani,
            Language::Italian,
            Language::Polish,
            Language::Portuguese,
        ]
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Language::Catalan => "Catalan",
            Language::German => "German",
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Guarani => "Guarani",
            Language::Italian => "Italian",
            Language::Polish => "Polish",
            Language::Portuguese => "Portuguese",
        }
    }

    /// Name of the language written in itself, as shown in language selectors.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Catalan => "Català",
            Language::German => "Deutsch",
            Language::English => "English",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::Guarani => "Guarani",
            Language::Italian => "Italiano",
            Language::Polish => "Polski",
            Language::Portuguese => "Português",
        }
    }

    /// The note translators leave next to text still waiting for a translation.
    pub fn needs_translation_marker(self) -> &'static str {
        match self {
            Language::Catalan => "Necessita traducció",
            Language::German => "Need Übersetzung",
            Language::English => "Need translation",
            Language::Spanish => "Necesita traducción",
            Language::French => "Besoin de traduction",
            Language::Guarani => "Okoteve traducción",
            Language::Italian => "Bisogno di traduzione",
            Language::Polish => "Potrzebujesz tlumaczenie",
            Language::Portuguese => "Precisa de tradução",
        }
    }

    /// Parse a user-supplied selector: ISO code (any case), platform number,
    /// or English name.
    pub fn parse_selector(selector: &str) -> Result<Language> {
        let trimmed = selector.trim();
        let lowered = trimmed.to_ascii_lowercase();

        if let Some(language) = Language::from_code(&lowered) {
            return Ok(language);
        }
        if let Some(language) = lowered.parse::<u8>().ok().and_then(Language::from_number) {
            return Ok(language);
        }
        if let Some(language) = Language::all()
            .iter()
            .copied()
            .find(|l| l.english_name().eq_ignore_ascii_case(trimmed))
        {
            return Ok(language);
        }

        if is_valid_iso639_1(&lowered) {
            Err(Error::UnsupportedLanguage {
                selector: trimmed.to_string(),
                name: language_name(&lowered),
            })
        } else {
            Err(Error::InvalidLanguage {
                selector: trimmed.to_string(),
            })
        }
    }
}

impl Default for Language {
    /// English is the source language of the catalog and the default build.
    fn default() -> Self {
        Language::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::parse_selector(s)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let selector = String::deserialize(deserializer)?;
        Language::parse_selector(&selector).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_follow_platform_order() {
        assert_eq!(Language::Catalan.number(), 1);
        assert_eq!(Language::English.number(), 3);
        assert_eq!(Language::Spanish.number(), 4);
        assert_eq!(Language::Portuguese.number(), 9);
        assert_eq!(Language::from_number(0), None);
        assert_eq!(Language::from_number(10), None);
    }

    #[test]
    fn code_and_number_roundtrip() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()), Some(*language));
            assert_eq!(Language::from_number(language.number()), Some(*language));
            assert_eq!(Language::all()[language.slot()], *language);
        }
    }

    #[test]
    fn selectors_accept_code_number_and_name() {
        assert_eq!(Language::parse_selector("ES").unwrap(), Language::Spanish);
        assert_eq!(Language::parse_selector(" 6 ").unwrap(), Language::Guarani);
        assert_eq!(Language::parse_selector("polish").unwrap(), Language::Polish);
    }

    #[test]
    fn unsupported_iso_code_is_distinguished_from_garbage() {
        assert!(matches!(
            Language::parse_selector("ja"),
            Err(Error::UnsupportedLanguage { .. })
        ));
        assert!(matches!(
            Language::parse_selector("klingon"),
            Err(Error::InvalidLanguage { .. })
        ));
    }

    #[test]
    fn serde_uses_iso_code() {
        let yaml = serde_yaml::to_string(&Language::Catalan).unwrap();
        assert_eq!(yaml.trim(), "ca");
        let parsed: Language = serde_yaml::from_str("pt").unwrap();
        assert_eq!(parsed, Language::Portuguese);
    }
}
