// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-check of the compiled label table.

use crate::catalog::{Action, ACTION_COUNT};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::i18n::Language;
use crate::labels::{translation, LabelTable, BUILD_LANGUAGE, BUILD_LANGUAGE_SELECTORS};
use crate::report::Coverage;
use anyhow::{anyhow, Result};
use colored::*;
use std::collections::HashSet;
use std::path::Path;

/// Coverage below this share of translated cells is reported as a warning.
const COVERAGE_WARN_PERCENT: f64 = 50.0;

/// Print every check; fails if any of them is an error.
///
/// `config_file` defaults to `swad-action-labels.yaml` in the working directory.
pub fn run_self_check(config_file: Option<&Path>) -> Result<()> {
    println!("swad-action-labels self-check");

    let checks = collect_checks(config_file.unwrap_or(Path::new(CONFIG_FILE_NAME)));

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-check reported issues"))
    } else {
        Ok(())
    }
}

/// Every check, in print order. `config_file` is only read if it exists.
pub fn collect_checks(config_file: &Path) -> Vec<Diagnostic> {
    let mut checks = vec![
        Diagnostic::ok(
            "version",
            format!("swad-action-labels {}", env!("CARGO_PKG_VERSION")),
        ),
        Diagnostic::ok(
            "build language",
            format!("{} ({})", BUILD_LANGUAGE.english_name(), BUILD_LANGUAGE),
        ),
        check_build_selectors(),
        check_catalog_order(),
        check_names(),
        check_totality(),
        check_english(),
    ];

    let coverage = Coverage::compute();
    for entry in &coverage.languages {
        let detail = format!(
            "{:.1}% translated ({} missing, {} blank)",
            entry.percent_translated, entry.counts.missing, entry.counts.blank
        );
        let label = entry.language.code();
        if entry.percent_translated >= COVERAGE_WARN_PERCENT {
            checks.push(Diagnostic::ok(label, detail));
        } else {
            checks.push(Diagnostic::warning(label, detail));
        }
    }

    checks.push(check_config(config_file));
    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

fn check_build_selectors() -> Diagnostic {
    for (selector, language) in BUILD_LANGUAGE_SELECTORS {
        match Language::parse_selector(selector) {
            Ok(parsed) if parsed == *language => {}
            Ok(parsed) => {
                return Diagnostic::error(
                    "language selectors",
                    format!(
                        "{:?} selects {} at build time but {} at run time",
                        selector, language, parsed
                    ),
                )
            }
            Err(err) => return Diagnostic::error("language selectors", err.to_string()),
        }
    }
    Diagnostic::ok(
        "language selectors",
        format!("{} build-time values agree with run time", BUILD_LANGUAGE_SELECTORS.len()),
    )
}

fn check_catalog_order() -> Diagnostic {
    let out_of_place = Action::iter()
        .enumerate()
        .find(|(position, action)| action.index() != *position);
    match out_of_place {
        None if Action::iter().count() == ACTION_COUNT => {
            Diagnostic::ok("catalog", format!("{} actions", ACTION_COUNT))
        }
        None => Diagnostic::error(
            "catalog",
            format!(
                "{} actions listed, {} expected",
                Action::iter().count(),
                ACTION_COUNT
            ),
        ),
        Some((position, action)) => Diagnostic::error(
            "catalog",
            format!("{} has index {} at position {}", action, action.index(), position),
        ),
    }
}

fn check_names() -> Diagnostic {
    let mut seen = HashSet::with_capacity(ACTION_COUNT);
    for action in Action::iter() {
        if !seen.insert(action.name()) {
            return Diagnostic::error("identifiers", format!("{} appears twice", action.name()));
        }
        if Action::from_name(action.name()) != Some(action) {
            return Diagnostic::error(
                "identifiers",
                format!("{} does not resolve back to itself", action.name()),
            );
        }
    }
    Diagnostic::ok("identifiers", "unique, name lookup round-trips".to_string())
}

fn check_totality() -> Diagnostic {
    for language in Language::all() {
        let cells = LabelTable::new(*language).iter().count();
        if cells != ACTION_COUNT {
            return Diagnostic::error(
                "totality",
                format!("{} has {} cells, expected {}", language, cells, ACTION_COUNT),
            );
        }
    }
    Diagnostic::ok(
        "totality",
        format!("{} languages x {} actions", Language::all().len(), ACTION_COUNT),
    )
}

fn check_english() -> Diagnostic {
    let missing: Vec<&str> = Action::iter()
        .filter(|action| !translation(*action, Language::English).is_translated())
        .map(Action::name)
        .collect();
    match missing.as_slice() {
        [] => Diagnostic::ok("english source", "every action has English text".to_string()),
        [first, ..] => Diagnostic::error(
            "english source",
            format!("{} actions without English text, first {}", missing.len(), first),
        ),
    }
}

fn check_config(path: &Path) -> Diagnostic {
    if !path.exists() {
        return Diagnostic::ok(
            "config file",
            format!("{} not present, using defaults", path.display()),
        );
    }
    match Config::from_file(path) {
        Ok(config) => Diagnostic::ok(
            "config file",
            format!("{} selects {}", path.display(), config.language.english_name()),
        ),
        Err(err) => Diagnostic::error("config file", err.to_string()),
    }
}
