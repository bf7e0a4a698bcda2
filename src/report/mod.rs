// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reports over the label table: listings, coverage, language summary

pub mod coverage;
pub mod formatter;
pub mod listing;
pub mod output;

pub use coverage::{untranslated, Counts, Coverage, LanguageCoverage, TabCoverage};
pub use formatter::ReportFormatter;
pub use listing::{language_rows, LabelListing, LanguageRow, ListingFilter, ListingRow};
pub use output::ReportOutputFormat;

/// Print a report in `format`: coloured text, or JSON/YAML on stdout.
pub fn emit<T, F>(format: ReportOutputFormat, report: &T, print_text: F) -> anyhow::Result<()>
where
    T: serde::Serialize,
    F: FnOnce(&ReportFormatter, &T),
{
    if format.is_structured() {
        println!("{}", format.serialize(report)?);
    } else {
        print_text(&ReportFormatter::new(), report);
    }
    Ok(())
}
