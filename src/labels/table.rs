// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static label columns and the language-bound view over them.

use crate::catalog::{Action, ACTION_COUNT};
use crate::i18n::{Language, LANGUAGE_COUNT};
use serde::Serialize;

include!(concat!(env!("OUT_DIR"), "/labels_generated.rs"));

/// State of one (action, language) cell of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum Translation {
    /// Non-empty text in the requested language.
    Translated(&'static str),
    /// Authored as deliberately empty.
    Blank,
    /// Nobody has translated this action into the language yet.
    Missing,
}

impl Translation {
    /// The text to show; empty for blank and missing cells.
    pub fn text(self) -> &'static str {
        match self {
            Translation::Translated(text) => text,
            Translation::Blank | Translation::Missing => "",
        }
    }

    pub fn is_translated(self) -> bool {
        matches!(self, Translation::Translated(_))
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Translation::Missing)
    }
}

/// Cell lookup with an explicit language, for text that must not follow
/// the active language (mail to a recipient, per-request rendering).
pub fn translation(action: Action, language: Language) -> Translation {
    COLUMNS[language.slot()][action.index()]
}

/// Text of `action` in `language`, empty when untranslated.
pub fn label(action: Action, language: Language) -> &'static str {
    translation(action, language).text()
}

/// The label table of one language.
///
/// Cheap to copy; all the data is static and immutable.
#[derive(Debug, Clone, Copy)]
pub struct LabelTable {
    language: Language,
    column: &'static [Translation; ACTION_COUNT],
}

impl LabelTable {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            column: COLUMNS[language.slot()],
        }
    }

    /// Table for the language chosen when the crate was built.
    pub fn build_default() -> Self {
        Self::new(BUILD_LANGUAGE)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Description of `action` in this table's language.
    ///
    /// Returns `""` when the action has no translation in the language;
    /// that is a valid result, not an error.
    pub fn resolve(&self, action: Action) -> &'static str {
        self.column[action.index()].text()
    }

    pub fn translation(&self, action: Action) -> Translation {
        self.column[action.index()]
    }

    /// Like [`resolve`](Self::resolve), but falls back to `fallback` when the
    /// cell is blank or missing. The fallback text may itself be empty.
    pub fn resolve_or(&self, action: Action, fallback: Language) -> &'static str {
        match self.translation(action) {
            Translation::Translated(text) => text,
            Translation::Blank | Translation::Missing => label(action, fallback),
        }
    }

    /// Every cell of the table, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, Translation)> + '_ {
        Action::iter().zip(self.column.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_cover_every_language() {
        assert_eq!(COLUMNS.len(), LANGUAGE_COUNT);
        for language in Language::all() {
            assert_eq!(LabelTable::new(*language).iter().count(), ACTION_COUNT);
        }
    }

    #[test]
    fn english_is_complete() {
        let table = LabelTable::new(Language::English);
        for (action, cell) in table.iter() {
            assert!(cell.is_translated(), "{} has no English text", action);
        }
    }

    #[test]
    fn text_is_empty_for_untranslated_cells() {
        assert_eq!(Translation::Missing.text(), "");
        assert_eq!(Translation::Blank.text(), "");
        assert_eq!(Translation::Translated("x").text(), "x");
    }

    #[test]
    fn fallback_only_applies_to_untranslated_cells() {
        let catalan = LabelTable::new(Language::Catalan);
        assert_eq!(catalan.resolve(Action::SeeSysInf), "");
        assert_eq!(
            catalan.resolve_or(Action::SeeSysInf, Language::English),
            label(Action::SeeSysInf, Language::English)
        );
        let spanish = LabelTable::new(Language::Spanish);
        assert_eq!(
            spanish.resolve_or(Action::All, Language::English),
            "Cualquier acción"
        );
    }

    #[test]
    fn build_selectors_parse_the_same_at_run_time() {
        for (selector, language) in BUILD_LANGUAGE_SELECTORS {
            assert_eq!(Language::parse_selector(selector).ok(), Some(*language), "{}", selector);
            let upper = selector.to_ascii_uppercase();
            assert_eq!(Language::parse_selector(&upper).ok(), Some(*language), "{}", upper);
        }
    }

    #[test]
    fn every_run_time_spelling_is_accepted_at_build_time() {
        let accepts = |value: String, language: Language| {
            BUILD_LANGUAGE_SELECTORS
                .iter()
                .any(|(accepted, l)| *accepted == value && *l == language)
        };
        for language in Language::all() {
            assert!(accepts(language.code().to_string(), *language));
            assert!(accepts(language.number().to_string(), *language));
            assert!(accepts(language.english_name().to_ascii_lowercase(), *language));
        }
        assert_eq!(BUILD_LANGUAGE_SELECTORS.len(), 3 * LANGUAGE_COUNT);
        assert!(accepts("spanish".to_string(), Language::Spanish));
    }

    #[test]
    fn translation_serializes_with_status() {
        let json = serde_json::to_string(&Translation::Translated("Any action")).unwrap();
        assert_eq!(json, r#"{"status":"translated","text":"Any action"}"#);
        let json = serde_json::to_string(&Translation::Missing).unwrap();
        assert_eq!(json, r#"{"status":"missing"}"#);
    }
}
