// SPDX-License-Identifier: PMPL-1.0-or-later

//! Supported languages of the platform.
//!
//! ## Supported languages
//!
//! | No. | Code | Language   | Native name |
//! |-----|------|------------|-------------|
//! | 1   | ca   | Catalan    | Català      |
//! | 2   | de   | German     | Deutsch     |
//! | 3   | en   | English    | English     |
//! | 4   | es   | Spanish    | Español     |
//! | 5   | fr   | French     | Français    |
//! | 6   | gn   | Guarani    | Guarani     |
//! | 7   | it   | Italian    | Italiano    |
//! | 8   | pl   | Polish     | Polski      |
//! | 9   | pt   | Portuguese | Português   |
//!
//! The numbers are the platform's own language codes and are stable; they
//! are what user preferences and request parameters carry.
//!
//! ## Design
//!
//! The set is closed. A selector string is parsed as an ISO 639-1 code, a
//! platform number or an English name. Codes that ISO 639-1 knows but the
//! platform does not translate into are reported separately from garbage,
//! so a typo and an unsupported locale give different errors.

mod iso639;
mod language;

pub use iso639::{is_valid_iso639_1, language_name};
pub use language::{Language, LANGUAGE_COUNT};
