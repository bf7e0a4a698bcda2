// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language code validation.
//!
//! Used when a language selector does not match a supported language, to
//! tell "real locale we do not translate into" apart from a typo.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Every ISO 639-1 two-letter code, sorted for binary search.
const ISO_639_1_CODES: [&str; 183] = [
    "aa", "ab", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba",
    "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch",
    "co", "cr", "cs", "cu", "cv", "cy", "da", "de", "dv", "dz", "ee", "el",
    "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr", "fy",
    "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht",
    "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it",
    "iu", "ja", "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko",
    "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln", "lo",
    "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt",
    "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny",
    "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm",
    "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl",
    "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta", "te",
    "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty",
    "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// Whether `code` is an ISO 639-1 two-letter code. Codes are lowercase.
///
/// # Examples
/// ```
/// assert!(swad_action_labels::i18n::is_valid_iso639_1("gn"));
/// assert!(swad_action_labels::i18n::is_valid_iso639_1("ja"));
/// assert!(!swad_action_labels::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    ISO_639_1_CODES.binary_search(&code).is_ok()
}

/// English name of an ISO 639-1 code outside the supported set, for error
/// messages. Supported languages carry their own names on
/// [`Language`](crate::i18n::Language).
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "ar" => Some("Arabic"),
        "eu" => Some("Basque"),
        "gl" => Some("Galician"),
        "ja" => Some("Japanese"),
        "zh" => Some("Chinese"),
        "ko" => Some("Korean"),
        "ru" => Some("Russian"),
        "nl" => Some("Dutch"),
        "sv" => Some("Swedish"),
        "tr" => Some("Turkish"),
        "uk" => Some("Ukrainian"),
        "cs" => Some("Czech"),
        "el" => Some("Greek"),
        "ro" => Some("Romanian"),
        "qu" => Some("Quechua"),
        "ay" => Some("Aymara"),
        _ => None,
    }
}
