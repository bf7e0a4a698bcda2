// SPDX-License-Identifier: PMPL-1.0-or-later

//! SWAD action labels: the human-readable description of every platform
//! action, in each of the nine languages the platform is offered in.
//!
//! The catalog of actions and the label text are compiled in from
//! `data/actions/*.yaml`. One language is active per process; it defaults to
//! the language chosen at build time with `SWAD_LANGUAGE` and can be set
//! once at start-up from configuration.
//!
//! ```
//! use swad_action_labels::{label, Action, Language};
//!
//! assert_eq!(label(Action::All, Language::English), "Any action");
//! // Untranslated cells resolve to an empty string.
//! assert_eq!(label(Action::SeeSysInf, Language::Catalan), "");
//! ```

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod labels;
pub mod report;

pub use catalog::{Action, Tab, ACTION_COUNT};
pub use config::Config;
pub use error::{Error, Result};
pub use i18n::Language;
pub use labels::{label, resolve, translation, LabelTable, Translation, BUILD_LANGUAGE};
