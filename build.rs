// SPDX-License-Identifier: PMPL-1.0-or-later

use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::{
    env,
    fs::{self, File},
    io::BufWriter,
    io::Write,
    path::{Path, PathBuf},
};

// BUILD SCRIPT - Generates the action catalog and label table
//
// The authoritative literal data lives in data/actions/*.yaml, one file per
// menu tab. Files are read in file-name order; catalog order is file order,
// then section order, then action order inside a section.
//
// GENERATED FILES:
// 1. actions_generated.rs - the Action enum, names, tabs, sections, name index
// 2. labels_generated.rs  - one static column of translations per language,
//                           plus the build-time language selection
//
// The build-time language is chosen with the SWAD_LANGUAGE environment
// variable (ISO 639-1 code, platform number 1..=9 or English name, any case;
// default "en").

const DATA_DIR: &str = "data/actions";
const LANGUAGE_ENV: &str = "SWAD_LANGUAGE";

/// (ISO code, platform number, Language variant), in platform order.
const LANGUAGES: [(&str, u8, &str); 9] = [
    ("ca", 1, "Catalan"),
    ("de", 2, "German"),
    ("en", 3, "English"),
    ("es", 4, "Spanish"),
    ("fr", 5, "French"),
    ("gn", 6, "Guarani"),
    ("it", 7, "Italian"),
    ("pl", 8, "Polish"),
    ("pt", 9, "Portuguese"),
];

/// (file key, Tab variant)
const TABS: [(&str, &str); 14] = [
    ("none", "NoTab"),
    ("start", "Start"),
    ("system", "System"),
    ("country", "Country"),
    ("institution", "Institution"),
    ("center", "Center"),
    ("degree", "Degree"),
    ("course", "Course"),
    ("assessment", "Assessment"),
    ("files", "Files"),
    ("users", "Users"),
    ("messages", "Messages"),
    ("analytics", "Analytics"),
    ("profile", "Profile"),
];

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TabFile {
    tab: String,
    sections: Vec<SectionData>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SectionData {
    name: String,
    actions: Vec<ActionData>,
}

// Omitted or `~` means "not translated yet"; an explicit "" is a deliberate blank.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ActionData {
    id: String,
    ca: Option<String>,
    de: Option<String>,
    en: Option<String>,
    es: Option<String>,
    fr: Option<String>,
    gn: Option<String>,
    it: Option<String>,
    pl: Option<String>,
    pt: Option<String>,
}

impl ActionData {
    /// Texts in platform language order.
    fn texts(&self) -> [Option<&str>; 9] {
        [
            self.ca.as_deref(),
            self.de.as_deref(),
            self.en.as_deref(),
            self.es.as_deref(),
            self.fr.as_deref(),
            self.gn.as_deref(),
            self.it.as_deref(),
            self.pl.as_deref(),
            self.pt.as_deref(),
        ]
    }
}

struct CatalogEntry {
    id: String,
    variant: String,
    tab_variant: &'static str,
    section: String,
    texts: [Option<String>; 9],
}

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();

    println!("cargo:rerun-if-changed={}", DATA_DIR);
    println!("cargo:rerun-if-env-changed={}", LANGUAGE_ENV);

    let build_language = select_build_language();
    let entries = load_catalog(Path::new(DATA_DIR));

    write_actions(&Path::new(&out_dir).join("actions_generated.rs"), &entries);
    write_labels(
        &Path::new(&out_dir).join("labels_generated.rs"),
        &entries,
        build_language,
    );
}

fn select_build_language() -> &'static str {
    let selector = match env::var(LANGUAGE_ENV) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_ascii_lowercase(),
        _ => return "English",
    };
    build_selectors()
        .into_iter()
        .find(|(accepted, _)| *accepted == selector)
        .map(|(_, variant)| variant)
        .unwrap_or_else(|| {
            panic!(
                "{}={:?} is not a supported language (expected an ISO code such as es, a number 1..=9 or an English name such as Spanish)",
                LANGUAGE_ENV, selector
            )
        })
}

/// Every lowercase value `SWAD_LANGUAGE` may take at build time: ISO code,
/// platform number and English name. The run-time parser accepts the same.
fn build_selectors() -> Vec<(String, &'static str)> {
    LANGUAGES
        .iter()
        .flat_map(|(code, number, variant)| {
            [
                (code.to_string(), *variant),
                (number.to_string(), *variant),
                (variant.to_ascii_lowercase(), *variant),
            ]
        })
        .collect()
}

fn load_catalog(dir: &Path) -> Vec<CatalogEntry> {
    let id_pattern = Regex::new(r"^Act(?:[A-Z]|_[A-Za-z])[A-Za-z0-9_]*$").unwrap();

    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|x| x.to_str()) == Some("yaml"))
        .collect();
    files.sort();

    let mut entries = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_tabs: HashSet<&'static str> = HashSet::new();

    for path in &files {
        println!("cargo:rerun-if-changed={}", path.display());

        let contents = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        let tab_file: TabFile = serde_yaml::from_str(&contents)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));

        let tab_variant = TABS
            .iter()
            .find(|(key, _)| *key == tab_file.tab)
            .map(|(_, variant)| *variant)
            .unwrap_or_else(|| panic!("{}: unknown tab {:?}", path.display(), tab_file.tab));
        if !seen_tabs.insert(tab_variant) {
            panic!("{}: tab {:?} is defined twice", path.display(), tab_file.tab);
        }

        for section in tab_file.sections {
            for action in section.actions {
                if !id_pattern.is_match(&action.id) {
                    panic!("{}: malformed action identifier {:?}", path.display(), action.id);
                }
                if !seen_ids.insert(action.id.clone()) {
                    panic!("{}: duplicate action {}", path.display(), action.id);
                }
                // English is the source language, every action must have it.
                match action.en.as_deref() {
                    Some(text) if !text.trim().is_empty() => {}
                    _ => panic!("{}: {} has no English text", path.display(), action.id),
                }

                let texts = action.texts().map(|t| t.map(str::to_string));
                entries.push(CatalogEntry {
                    variant: action.id["Act".len()..].to_string(),
                    id: action.id,
                    tab_variant,
                    section: section.name.clone(),
                    texts,
                });
            }
        }
    }

    if entries.is_empty() {
        panic!("{} contains no actions", dir.display());
    }
    if entries.len() > u16::MAX as usize {
        panic!("too many actions for a u16 discriminant: {}", entries.len());
    }
    entries
}

// Helper to escape strings for Rust source
fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

fn write_actions(dest: &Path, entries: &[CatalogEntry]) {
    let mut w = BufWriter::new(File::create(dest).expect("Failed to create actions_generated.rs"));

    writeln!(&mut w, "// Auto-generated from data/actions - DO NOT EDIT").unwrap();
    writeln!(&mut w, "// Included into catalog/mod.rs, which holds the imports.").unwrap();
    writeln!(&mut w).unwrap();

    writeln!(&mut w, "/// Number of actions in the catalog.").unwrap();
    writeln!(&mut w, "pub const ACTION_COUNT: usize = {};", entries.len()).unwrap();
    writeln!(&mut w).unwrap();

    writeln!(&mut w, "/// Every user-facing action recognised by the platform.").unwrap();
    writeln!(&mut w, "///").unwrap();
    writeln!(
        &mut w,
        "/// Discriminants are dense and zero based, in catalog order."
    )
    .unwrap();
    writeln!(
        &mut w,
        "#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]"
    )
    .unwrap();
    writeln!(&mut w, "#[repr(u16)]").unwrap();
    // Identifiers such as ActUp_TreNodInf and Act_DoAct_OnSevStd keep their underscores.
    writeln!(&mut w, "#[allow(non_camel_case_types)]").unwrap();
    writeln!(&mut w, "pub enum Action {{").unwrap();
    for (index, entry) in entries.iter().enumerate() {
        let english = entry.texts[2].as_deref().unwrap_or_default();
        writeln!(&mut w, "    #[doc = \"{}\"]", escape_str(english)).unwrap();
        writeln!(&mut w, "    {} = {},", entry.variant, index).unwrap();
    }
    writeln!(&mut w, "}}").unwrap();
    writeln!(&mut w).unwrap();

    writeln!(&mut w, "impl Action {{").unwrap();
    writeln!(&mut w, "    /// All actions in catalog order.").unwrap();
    writeln!(&mut w, "    pub const ALL: &'static [Action; ACTION_COUNT] = &[").unwrap();
    for entry in entries {
        writeln!(&mut w, "        Action::{},", entry.variant).unwrap();
    }
    writeln!(&mut w, "    ];").unwrap();
    writeln!(&mut w, "}}").unwrap();
    writeln!(&mut w).unwrap();

    writeln!(&mut w, "const ACTION_NAMES: [&str; ACTION_COUNT] = [").unwrap();
    for entry in entries {
        writeln!(&mut w, "    \"{}\",", entry.id).unwrap();
    }
    writeln!(&mut w, "];").unwrap();
    writeln!(&mut w).unwrap();

    writeln!(&mut w, "const ACTION_TABS: [Tab; ACTION_COUNT] = [").unwrap();
    for entry in entries {
        writeln!(&mut w, "    Tab::{},", entry.tab_variant).unwrap();
    }
    writeln!(&mut w, "];").unwrap();
    writeln!(&mut w).unwrap();

    writeln!(&mut w, "const ACTION_SECTIONS: [&str; ACTION_COUNT] = [").unwrap();
    for entry in entries {
        writeln!(&mut w, "    \"{}\",", escape_str(&entry.section)).unwrap();
    }
    writeln!(&mut w, "];").unwrap();
    writeln!(&mut w).unwrap();

    // Keys must not be additionally quoted; phf_codegen will add quotes itself.
    let mut by_name = ::phf_codegen::Map::new();
    for entry in entries {
        by_name.entry(entry.id.as_str(), &format!("Action::{}", entry.variant));
    }
    writeln!(
        &mut w,
        "static ACTION_BY_NAME: phf::Map<&'static str, Action> = {};",
        by_name.build()
    )
    .unwrap();
}

fn write_labels(dest: &Path, entries: &[CatalogEntry], build_language: &str) {
    let mut w = BufWriter::new(File::create(dest).expect("Failed to create labels_generated.rs"));

    writeln!(&mut w, "// Auto-generated from data/actions - DO NOT EDIT").unwrap();
    writeln!(&mut w, "// Included into labels/table.rs, which holds the imports.").unwrap();
    writeln!(&mut w).unwrap();

    writeln!(
        &mut w,
        "/// Language selected at build time through `{}`.",
        LANGUAGE_ENV
    )
    .unwrap();
    writeln!(
        &mut w,
        "pub const BUILD_LANGUAGE: Language = Language::{};",
        build_language
    )
    .unwrap();
    writeln!(&mut w).unwrap();

    writeln!(
        &mut w,
        "/// Lowercase values `{}` accepts at build time, with their language.",
        LANGUAGE_ENV
    )
    .unwrap();
    writeln!(
        &mut w,
        "pub const BUILD_LANGUAGE_SELECTORS: &[(&str, Language)] = &["
    )
    .unwrap();
    for (selector, variant) in build_selectors() {
        writeln!(&mut w, "    (\"{}\", Language::{}),", selector, variant).unwrap();
    }
    writeln!(&mut w, "];").unwrap();
    writeln!(&mut w).unwrap();

    for (slot, (code, _, _)) in LANGUAGES.iter().enumerate() {
        writeln!(
            &mut w,
            "static COLUMN_{}: [Translation; ACTION_COUNT] = [",
            code.to_ascii_uppercase()
        )
        .unwrap();
        for entry in entries {
            match entry.texts[slot].as_deref() {
                None => writeln!(&mut w, "    Translation::Missing,").unwrap(),
                Some("") => writeln!(&mut w, "    Translation::Blank,").unwrap(),
                Some(text) => writeln!(
                    &mut w,
                    "    Translation::Translated(\"{}\"),",
                    escape_str(text)
                )
                .unwrap(),
            }
        }
        writeln!(&mut w, "];").unwrap();
        writeln!(&mut w).unwrap();
    }

    writeln!(
        &mut w,
        "static COLUMNS: [&[Translation; ACTION_COUNT]; LANGUAGE_COUNT] = ["
    )
    .unwrap();
    for (code, _, _) in LANGUAGES.iter() {
        writeln!(&mut w, "    &COLUMN_{},", code.to_ascii_uppercase()).unwrap();
    }
    writeln!(&mut w, "];").unwrap();
}
