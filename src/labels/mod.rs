// SPDX-License-Identifier: PMPL-1.0-or-later

//! Action label table.
//!
//! For every [`Action`] and every [`Language`] the table holds one
//! [`Translation`]. The table is total: a cell can be missing a
//! translation, but it always exists.
//!
//! The process has one active language. It is installed once at start-up
//! with [`install`]; if nothing is installed, the first lookup publishes the
//! language the crate was built for ([`BUILD_LANGUAGE`]). After that the
//! active table never changes, so [`resolve`] can be called from any thread
//! without locking.
//!
//! ```
//! use swad_action_labels::catalog::Action;
//! use swad_action_labels::i18n::Language;
//! use swad_action_labels::labels::{label, LabelTable};
//!
//! let spanish = LabelTable::new(Language::Spanish);
//! assert_eq!(spanish.resolve(Action::All), "Cualquier acción");
//! assert_eq!(label(Action::All, Language::English), "Any action");
//! ```

mod table;

pub use table::{
    label, translation, LabelTable, Translation, BUILD_LANGUAGE, BUILD_LANGUAGE_SELECTORS,
};

use crate::catalog::Action;
use crate::error::{Error, Result};
use crate::i18n::Language;
use std::sync::OnceLock;

static ACTIVE: OnceLock<LabelTable> = OnceLock::new();

/// Publish the table for `language` as the process-wide active table.
///
/// Installing the language that is already active is a no-op. Switching to
/// another language after the table has been published is refused.
pub fn install(language: Language) -> Result<&'static LabelTable> {
    let table = ACTIVE.get_or_init(|| {
        log::debug!("installing {} label table", language.english_name());
        LabelTable::new(language)
    });
    if table.language() == language {
        Ok(table)
    } else {
        Err(Error::AlreadyInstalled {
            installed: table.language(),
            requested: language,
        })
    }
}

/// The active table, publishing the build language if nothing was installed.
pub fn active() -> &'static LabelTable {
    ACTIVE.get_or_init(|| {
        log::debug!(
            "no label table installed, using build language {}",
            BUILD_LANGUAGE.english_name()
        );
        LabelTable::build_default()
    })
}

/// Description of `action` in the active language, `""` when untranslated.
pub fn resolve(action: Action) -> &'static str {
    active().resolve(action)
}
