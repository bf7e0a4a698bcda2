// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output

use crate::labels::Translation;
use crate::report::coverage::{Counts, Coverage};
use crate::report::listing::{LabelListing, LanguageRow};
use crate::report::output::ReportOutputFormat;
use anyhow::{bail, Result};
use colored::*;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_coverage(&self, coverage: &Coverage) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "=== ACTION LABEL COVERAGE ===".bold().cyan());
        let _ = writeln!(out, "  Actions: {}", coverage.action_count);
        let _ = writeln!(out, "  Generated: {}", coverage.generated_at.dimmed());
        let _ = writeln!(out);

        for entry in &coverage.languages {
            let _ = writeln!(
                out,
                "  {} {:<11} {}  {}",
                entry.language.code().bold(),
                entry.name,
                percent(entry.percent_translated),
                counts_summary(&entry.counts)
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "{}", "PER TAB".bold().yellow());
        for entry in &coverage.languages {
            let tabs: Vec<String> = entry
                .tabs
                .iter()
                .map(|t| format!("{} {}/{}", t.tab, t.counts.translated, t.counts.total()))
                .collect();
            let _ = writeln!(out, "  {}: {}", entry.language.code().bold(), tabs.join(", "));
        }
        out
    }

    pub fn render_listing(&self, listing: &LabelListing) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}",
            format!(
                "=== {} ACTION LABELS ({}) ===",
                listing.language.english_name().to_uppercase(),
                listing.rows.len()
            )
            .bold()
            .cyan()
        );
        for row in &listing.rows {
            let text = match row.translation {
                Translation::Translated(text) => text.normal(),
                Translation::Blank => "(blank)".yellow(),
                Translation::Missing => listing
                    .language
                    .needs_translation_marker()
                    .red()
                    .italic(),
            };
            let _ = writeln!(
                out,
                "{:>5}  {:<30} {:<12} {}",
                row.index,
                row.action.name(),
                row.tab.to_string().dimmed(),
                text
            );
        }
        out
    }

    pub fn render_languages(&self, rows: &[LanguageRow]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "SUPPORTED LANGUAGES".bold().yellow());
        for row in rows {
            let active = if row.active { "*".green().bold() } else { " ".normal() };
            let _ = writeln!(
                out,
                "{} {}  {}  {:<11} {}",
                active, row.number, row.code.bold(), row.name, row.native_name
            );
        }
        out
    }

    pub fn print_coverage(&self, coverage: &Coverage) {
        print!("{}", self.render_coverage(coverage));
    }

    pub fn print_listing(&self, listing: &LabelListing) {
        print!("{}", self.render_listing(listing));
    }

    pub fn print_languages(&self, rows: &[LanguageRow]) {
        print!("{}", self.render_languages(rows));
    }

    /// Write a structured report to `path`; the format follows the extension,
    /// JSON when it is not recognised. A text extension is refused.
    pub fn save<T: Serialize, P: AsRef<Path>>(&self, report: &T, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = ReportOutputFormat::Json.extension();
        let yaml = ReportOutputFormat::Yaml.extension();
        let requested = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ReportOutputFormat::parse);
        let format = match requested {
            Some(format) if format.is_structured() => format,
            Some(_) => bail!(
                "cannot save a text report to {}, use a .{} or .{} file",
                path.display(),
                json,
                yaml
            ),
            None => {
                log::warn!(
                    "{} has no .{} or .{} extension, saving as JSON",
                    path.display(),
                    json,
                    yaml
                );
                ReportOutputFormat::Json
            }
        };
        fs::write(path, format.serialize(report)?)?;
        log::info!("report saved to {}", path.display());
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn percent(value: f64) -> ColoredString {
    let text = format!("{:>6.1}%", value);
    if value >= 90.0 {
        text.green()
    } else if value >= 50.0 {
        text.yellow()
    } else {
        text.red()
    }
}

fn counts_summary(counts: &Counts) -> String {
    format!(
        "translated {}, blank {}, missing {}",
        counts.translated, counts.blank, counts.missing
    )
}
