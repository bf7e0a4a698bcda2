// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error type shared by the library.
//!
//! A missing translation is not an error: it resolves to the empty string.
//! Everything here is a caller mistake or a configuration problem.

use crate::i18n::Language;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("action index {index} is out of range (the catalog has {count} actions)")]
    ActionOutOfRange { index: usize, count: usize },

    #[error("unknown action identifier: {0}")]
    UnknownAction(String),

    #[error(
        "{selector:?} ({}) is a valid ISO 639-1 code but not a supported language",
        .name.unwrap_or("unlisted")
    )]
    UnsupportedLanguage {
        selector: String,
        name: Option<&'static str>,
    },

    #[error("{selector:?} is not a language code, number or name")]
    InvalidLanguage { selector: String },

    #[error("label table already installed for {installed}, refusing to switch to {requested}")]
    AlreadyInstalled {
        installed: Language,
        requested: Language,
    },

    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
