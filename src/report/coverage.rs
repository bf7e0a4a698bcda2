// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation coverage per language and per tab.

use crate::catalog::{Action, Tab, ACTION_COUNT};
use crate::i18n::Language;
use crate::labels::{translation, Translation};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub translated: usize,
    pub blank: usize,
    pub missing: usize,
}

impl Counts {
    fn record(&mut self, cell: Translation) {
        match cell {
            Translation::Translated(_) => self.translated += 1,
            Translation::Blank => self.blank += 1,
            Translation::Missing => self.missing += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.translated + self.blank + self.missing
    }

    /// Share of translated cells, 0.0 to 100.0.
    pub fn percent_translated(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.translated as f64 * 100.0 / self.total() as f64
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TabCoverage {
    pub tab: Tab,
    pub counts: Counts,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageCoverage {
    pub language: Language,
    pub name: &'static str,
    pub counts: Counts,
    pub percent_translated: f64,
    pub tabs: Vec<TabCoverage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Coverage {
    pub generated_at: String,
    pub action_count: usize,
    pub languages: Vec<LanguageCoverage>,
}

impl Coverage {
    pub fn compute() -> Self {
        let languages = Language::all()
            .iter()
            .map(|language| language_coverage(*language))
            .collect();
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            action_count: ACTION_COUNT,
            languages,
        }
    }

    pub fn for_language(&self, language: Language) -> Option<&LanguageCoverage> {
        self.languages.iter().find(|c| c.language == language)
    }
}

fn language_coverage(language: Language) -> LanguageCoverage {
    let mut counts = Counts::default();
    let mut tabs: Vec<TabCoverage> = Tab::all()
        .iter()
        .map(|tab| TabCoverage {
            tab: *tab,
            counts: Counts::default(),
        })
        .collect();

    for action in Action::iter() {
        let cell = translation(action, language);
        counts.record(cell);
        if let Some(entry) = tabs.iter_mut().find(|t| t.tab == action.tab()) {
            entry.counts.record(cell);
        }
    }
    tabs.retain(|t| t.counts.total() > 0);

    LanguageCoverage {
        language,
        name: language.english_name(),
        counts,
        percent_translated: counts.percent_translated(),
        tabs,
    }
}

/// Actions still waiting for a translation into `language`.
pub fn untranslated(language: Language) -> Vec<Action> {
    Action::iter()
        .filter(|action| translation(*action, language).is_missing())
        .collect()
}
