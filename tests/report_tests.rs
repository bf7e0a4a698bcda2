// SPDX-License-Identifier: PMPL-1.0-or-later

//! Coverage, listing and export of label reports

use swad_action_labels::catalog::{Action, Tab, ACTION_COUNT};
use swad_action_labels::i18n::Language;
use swad_action_labels::labels::{LabelTable, Translation};
use swad_action_labels::report::{
    untranslated, Coverage, LabelListing, ListingFilter, ReportFormatter,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_coverage_matches_untranslated_list() {
    let coverage = Coverage::compute();
    for language in Language::all() {
        let entry = coverage.for_language(*language).unwrap();
        assert_eq!(
            entry.counts.missing,
            untranslated(*language).len(),
            "{}",
            language.english_name()
        );
        assert_eq!(entry.counts.total(), ACTION_COUNT);
    }
}

#[test]
fn test_partial_languages_are_reported_as_partial() {
    let coverage = Coverage::compute();
    let spanish = coverage.for_language(Language::Spanish).unwrap();
    assert_eq!(spanish.counts.missing, 0);
    assert!((spanish.percent_translated - 100.0).abs() < f64::EPSILON);

    let catalan = coverage.for_language(Language::Catalan).unwrap();
    assert!(catalan.counts.missing > 0);
    assert!(catalan.percent_translated < 100.0);
    assert!(untranslated(Language::Catalan).contains(&Action::SeeSysInf));

    let guarani = coverage.for_language(Language::Guarani).unwrap();
    assert_eq!(guarani.counts.blank, 1);
}

#[test]
fn test_listing_by_tab_keeps_catalog_order() {
    let table = LabelTable::new(Language::English);
    let filter = ListingFilter {
        tab: Some(Tab::Analytics),
        missing_only: false,
    };
    let listing = LabelListing::build(&table, &filter);

    assert!(!listing.rows.is_empty());
    assert!(listing.rows.iter().all(|row| row.tab == Tab::Analytics));
    assert!(listing.rows.windows(2).all(|w| w[0].index < w[1].index));
    assert_eq!(listing.rows.last().unwrap().action, Action::MFUAct);
}

#[test]
fn test_missing_listing_has_no_translated_rows() {
    let table = LabelTable::new(Language::Italian);
    let filter = ListingFilter {
        tab: None,
        missing_only: true,
    };
    let listing = LabelListing::build(&table, &filter);

    assert_eq!(listing.rows.len(), untranslated(Language::Italian).len());
    assert!(listing
        .rows
        .iter()
        .all(|row| row.translation == Translation::Missing));
}

#[test]
fn test_save_coverage_as_json_and_yaml() {
    let dir = TempDir::new().unwrap();
    let formatter = ReportFormatter::new();
    let coverage = Coverage::compute();

    let json_path = dir.path().join("coverage.json");
    formatter.save(&coverage, &json_path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["action_count"], ACTION_COUNT);
    assert_eq!(json["languages"].as_array().unwrap().len(), 9);

    let yaml_path = dir.path().join("coverage.yml");
    formatter.save(&coverage, &yaml_path).unwrap();
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(&yaml_path).unwrap()).unwrap();
    assert_eq!(yaml["action_count"].as_u64(), Some(ACTION_COUNT as u64));
}

#[test]
fn test_unknown_extension_falls_back_to_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("listing.out");
    let table = LabelTable::new(Language::German);
    let listing = LabelListing::build(
        &table,
        &ListingFilter {
            tab: Some(Tab::NoTab),
            missing_only: false,
        },
    );

    ReportFormatter::new().save(&listing, &path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["language"], "de");
    assert_eq!(json["rows"][0]["action"], "ActAll");
    assert_eq!(json["rows"][0]["translation"]["status"], "translated");
}
