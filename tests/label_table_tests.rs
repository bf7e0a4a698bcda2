// SPDX-License-Identifier: PMPL-1.0-or-later

//! Integration tests for the action catalog and the label table

use swad_action_labels::catalog::{Action, Tab, ACTION_COUNT};
use swad_action_labels::i18n::Language;
use swad_action_labels::labels::{self, label, translation, LabelTable, Translation};
use std::collections::HashSet;

#[test]
fn test_every_language_has_a_cell_for_every_action() {
    for language in Language::all() {
        let table = LabelTable::new(*language);
        let cells: Vec<_> = table.iter().collect();
        assert_eq!(cells.len(), ACTION_COUNT, "{} table is short", language);
        for (i, (action, _)) in cells.iter().enumerate() {
            assert_eq!(action.index(), i);
        }
    }
}

#[test]
fn test_english_and_spanish_are_complete() {
    for language in [Language::English, Language::Spanish] {
        for action in Action::iter() {
            assert!(
                !label(action, language).is_empty(),
                "{} has no {} text",
                action,
                language.english_name()
            );
        }
    }
}

#[test]
fn test_untranslated_cells_resolve_to_empty_string() {
    // Catalan never got the System tab.
    assert_eq!(
        translation(Action::SeeSysInf, Language::Catalan),
        Translation::Missing
    );
    assert_eq!(LabelTable::new(Language::Catalan).resolve(Action::SeeSysInf), "");

    // Guarani keeps an authored blank for the web service entry point.
    assert_eq!(
        translation(Action::WebSvc, Language::Guarani),
        Translation::Blank
    );
    assert_eq!(label(Action::WebSvc, Language::Guarani), "");
}

#[test]
fn test_known_labels() {
    assert_eq!(label(Action::All, Language::English), "Any action");
    assert_eq!(label(Action::All, Language::Spanish), "Cualquier acción");
    assert_eq!(label(Action::LogOut, Language::German), "Abmelden");
    assert_eq!(label(Action::LogOut, Language::Portuguese), "Sair");
    assert_eq!(
        label(Action::SeeSysInf, Language::Italian),
        "Informazioni sulla piattaforma"
    );
}

#[test]
fn test_identifiers_with_underscores() {
    let action = Action::from_name("Act_DoAct_OnSevStd").expect("identifier is in the catalog");
    assert_eq!(action, Action::_DoAct_OnSevStd);
    assert_eq!(action.tab(), Tab::Users);
    assert_eq!(action.section(), "Students");
    assert_eq!(Action::Up_TreNodInf.name(), "ActUp_TreNodInf");
}

#[test]
fn test_catalog_identifiers_are_unique() {
    let names: HashSet<&str> = Action::iter().map(Action::name).collect();
    assert_eq!(names.len(), ACTION_COUNT);
}

#[test]
fn test_tabs_are_contiguous_and_in_menu_order() {
    let mut seen = Vec::new();
    for action in Action::iter() {
        if seen.last() != Some(&action.tab()) {
            assert!(
                !seen.contains(&action.tab()),
                "{} reopens tab {}",
                action,
                action.tab()
            );
            seen.push(action.tab());
        }
    }
    assert_eq!(seen, Tab::all().to_vec());
}

#[test]
fn test_catalog_bounds() {
    assert_eq!(Action::iter().next(), Some(Action::All));
    let last = Action::iter().next_back().unwrap();
    assert_eq!(last.index(), ACTION_COUNT - 1);
    assert_eq!(last.tab(), Tab::Profile);
    assert!(Action::from_index(ACTION_COUNT).is_none());
    assert!(Action::try_from(u16::MAX).is_err());
}

#[test]
fn test_fallback_fills_gaps_only() {
    let polish = LabelTable::new(Language::Polish);
    assert_eq!(polish.resolve(Action::ChgLan), "Zmień język");
    assert_eq!(polish.resolve_or(Action::ChgLan, Language::English), "Zmień język");
    assert_eq!(polish.resolve(Action::SeeSysInf), "");
    assert_eq!(
        polish.resolve_or(Action::SeeSysInf, Language::English),
        "Information about the platform"
    );
}

// The active table is process-wide and this file is its own test binary,
// so the whole install sequence lives in one test.
#[test]
fn test_active_table_is_published_once() {
    let table = labels::install(Language::French).expect("first install succeeds");
    assert_eq!(table.language(), Language::French);
    assert_eq!(labels::resolve(Action::LogOut), "Se déconnecter");
    assert_eq!(swad_action_labels::resolve(Action::SeeSysInf), "");

    assert!(labels::install(Language::French).is_ok());
    assert!(labels::install(Language::Spanish).is_err());
    assert_eq!(labels::active().language(), Language::French);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| labels::resolve(Action::All)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "Toute action");
    }
}
