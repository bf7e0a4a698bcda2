// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported reports

use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    /// Coloured, human-readable terminal output.
    #[default]
    Text,
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(ReportOutputFormat::Text),
            "json" => Some(ReportOutputFormat::Json),
            "yaml" | "yml" => Some(ReportOutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportOutputFormat::Text => "txt",
            ReportOutputFormat::Json => "json",
            ReportOutputFormat::Yaml => "yaml",
        }
    }

    pub fn is_structured(&self) -> bool {
        !matches!(self, ReportOutputFormat::Text)
    }

    /// Machine-readable rendering. Text output goes through
    /// [`ReportFormatter`](crate::report::ReportFormatter) instead.
    pub fn serialize<T: Serialize>(&self, report: &T) -> Result<String> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
            ReportOutputFormat::Text => bail!("text reports are printed by the formatter"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Action;
    use crate::i18n::Language;
    use crate::labels::LabelTable;
    use crate::report::{LabelListing, ListingFilter};

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(ReportOutputFormat::parse("YML"), Some(ReportOutputFormat::Yaml));
        assert_eq!(ReportOutputFormat::parse("json"), Some(ReportOutputFormat::Json));
        assert_eq!(ReportOutputFormat::parse("txt"), Some(ReportOutputFormat::Text));
        assert_eq!(ReportOutputFormat::parse("xml"), None);
    }

    #[test]
    fn listing_serializes_as_json_and_yaml() {
        let table = LabelTable::new(Language::Spanish);
        let mut listing = LabelListing::build(&table, &ListingFilter::default());
        listing.rows.truncate(1);

        let json = ReportOutputFormat::Json.serialize(&listing).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["language"], "es");
        assert_eq!(value["rows"][0]["action"], Action::All.name());
        assert_eq!(value["rows"][0]["translation"]["text"], "Cualquier acción");

        let yaml = ReportOutputFormat::Yaml.serialize(&listing).unwrap();
        assert!(yaml.contains("language: es"));
    }

    #[test]
    fn extensions_parse_back_to_their_format() {
        for format in [
            ReportOutputFormat::Text,
            ReportOutputFormat::Json,
            ReportOutputFormat::Yaml,
        ] {
            assert_eq!(ReportOutputFormat::parse(format.extension()), Some(format));
        }
        assert_eq!(ReportOutputFormat::Yaml.extension(), "yaml");
    }

    #[test]
    fn text_is_not_serialized() {
        assert!(ReportOutputFormat::Text.serialize(&1u8).is_err());
        assert!(!ReportOutputFormat::Text.is_structured());
    }
}
