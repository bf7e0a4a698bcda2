// SPDX-License-Identifier: PMPL-1.0-or-later

//! Label listings: the rows of one language table, optionally filtered.

use crate::catalog::{Action, Tab};
use crate::i18n::Language;
use crate::labels::{LabelTable, Translation};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListingFilter {
    pub tab: Option<Tab>,
    /// Only cells with no translation yet.
    pub missing_only: bool,
}

impl ListingFilter {
    fn accepts(&self, action: Action, cell: Translation) -> bool {
        if let Some(tab) = self.tab {
            if action.tab() != tab {
                return false;
            }
        }
        !self.missing_only || cell.is_missing()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingRow {
    pub index: usize,
    pub action: Action,
    pub tab: Tab,
    pub section: &'static str,
    pub translation: Translation,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelListing {
    pub language: Language,
    pub rows: Vec<ListingRow>,
}

impl LabelListing {
    pub fn build(table: &LabelTable, filter: &ListingFilter) -> Self {
        let rows = table
            .iter()
            .filter(|(action, cell)| filter.accepts(*action, *cell))
            .map(|(action, cell)| ListingRow {
                index: action.index(),
                action,
                tab: action.tab(),
                section: action.section(),
                translation: cell,
            })
            .collect();
        Self {
            language: table.language(),
            rows,
        }
    }
}

/// One row of the supported-language listing.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageRow {
    pub number: u8,
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub needs_translation_marker: &'static str,
    pub active: bool,
}

pub fn language_rows(active: Language) -> Vec<LanguageRow> {
    Language::all()
        .iter()
        .map(|language| LanguageRow {
            number: language.number(),
            code: language.code(),
            name: language.english_name(),
            native_name: language.native_name(),
            needs_translation_marker: language.needs_translation_marker(),
            active: *language == active,
        })
        .collect()
}
