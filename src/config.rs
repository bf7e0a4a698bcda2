// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run-time selection of the active language.
//!
//! Sources, later ones win:
//!
//! 1. the language the crate was built for (`SWAD_LANGUAGE` at build time)
//! 2. a YAML file: the explicit path, else `swad-action-labels.yaml` in the
//!    working directory when it exists
//! 3. the `SWAD_LANGUAGE` environment variable at run time
//! 4. an override from the command line
//!
//! ```yaml
//! language: es
//! fallback: en
//! ```

use crate::error::{Error, Result};
use crate::i18n::Language;
use crate::labels::{self, LabelTable, BUILD_LANGUAGE};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "swad-action-labels.yaml";
pub const LANGUAGE_ENV: &str = "SWAD_LANGUAGE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_language")]
    pub language: Language,
    /// Language used by callers that want text even for untranslated cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Language>,
}

fn default_language() -> Language {
    BUILD_LANGUAGE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            fallback: None,
        }
    }
}

impl Config {
    /// Read a config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the configuration from file and process environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with_env(explicit, env::var(LANGUAGE_ENV).ok())
    }

    /// Same as [`load`](Self::load) with the environment value passed in.
    pub fn load_with_env(explicit: Option<&Path>, env_language: Option<String>) -> Result<Self> {
        let mut config = match config_path(explicit) {
            Some(path) => {
                log::debug!("reading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            None => Self::default(),
        };

        if let Some(value) = env_language {
            if value.trim().is_empty() {
                log::warn!("{} is set but empty, ignoring it", LANGUAGE_ENV);
                return Ok(config);
            }
            let language = Language::parse_selector(&value)?;
            log::debug!("{} overrides language with {}", LANGUAGE_ENV, language);
            config.language = language;
        }

        Ok(config)
    }

    /// Apply a command-line override.
    pub fn with_language(mut self, language: Option<Language>) -> Self {
        if let Some(language) = language {
            self.language = language;
        }
        self
    }

    /// Publish the configured language as the active label table.
    pub fn install(&self) -> Result<&'static LabelTable> {
        labels::install(self.language)
    }
}

fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let implicit = PathBuf::from(CONFIG_FILE_NAME);
    if implicit.is_file() {
        Some(implicit)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_build_language() {
        let config = Config::default();
        assert_eq!(config.language, BUILD_LANGUAGE);
        assert_eq!(config.fallback, None);
    }

    #[test]
    fn command_line_wins() {
        let config = Config::default().with_language(Some(Language::Polish));
        assert_eq!(config.language, Language::Polish);
        let config = config.with_language(None);
        assert_eq!(config.language, Language::Polish);
    }

    #[test]
    fn yaml_accepts_numbers_and_codes() {
        let config: Config = serde_yaml::from_str("language: 4\nfallback: en\n").unwrap();
        assert_eq!(config.language, Language::Spanish);
        assert_eq!(config.fallback, Some(Language::English));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_yaml::from_str::<Config>("lang: es\n").is_err());
    }
}
