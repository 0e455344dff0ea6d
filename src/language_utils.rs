//! Language utilities for ISO language code handling
//!
//! This module turns the free-text language names found in OHMS
//! documents into ISO 639-3 codes, the form Matroska chapter
//! displays expect in `ChapterLanguage`.

use anyhow::{Result, anyhow};
use isolang::Language;
use log::warn;

/// Code written when a language cannot be determined
pub const UNDETERMINED_LANGUAGE: &str = "und";

/// Map an ISO 639-2/B code to its ISO 639-2/T equivalent
fn part2b_to_part2t(code: &str) -> Option<&'static str> {
    match code {
        "fre" => Some("fra"), // French
        "ger" => Some("deu"), // German
        "dut" => Some("nld"), // Dutch
        "gre" => Some("ell"), // Greek
        "chi" => Some("zho"), // Chinese
        "cze" => Some("ces"), // Czech
        "ice" => Some("isl"), // Icelandic
        "alb" => Some("sqi"), // Albanian
        "arm" => Some("hye"), // Armenian
        "baq" => Some("eus"), // Basque
        "bur" => Some("mya"), // Burmese
        "per" => Some("fas"), // Persian
        "geo" => Some("kat"), // Georgian
        "may" => Some("msa"), // Malay
        "mac" => Some("mkd"), // Macedonian
        "rum" => Some("ron"), // Romanian
        "slo" => Some("slk"), // Slovak
        "wel" => Some("cym"), // Welsh
        _ => None,
    }
}

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    // If it's a 2-letter code, convert to 3-letter
    if normalized_code.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized_code) {
            return Ok(lang.to_639_3().to_string());
        }
    }
    // If it's already a 3-letter code, ensure it's ISO 639-2/T
    else if normalized_code.len() == 3 {
        if Language::from_639_3(&normalized_code).is_some() {
            return Ok(normalized_code);
        }

        if let Some(part2t) = part2b_to_part2t(&normalized_code) {
            return Ok(part2t.to_string());
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Look up a language by its English name, ignoring ASCII case
pub fn language_from_name(name: &str) -> Option<Language> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    Language::from_name(name)
        .or_else(|| isolang::languages().find(|lang| lang.to_name().eq_ignore_ascii_case(name)))
}

/// Resolve a free-text language name to its ISO 639-3 code
///
/// English ISO 639-3 names are matched first, exactly and then ignoring
/// case. Values that match no name are tried as ISO 639-1 or 639-2
/// codes and normalized to 3 letters. Returns `None` when the name is
/// empty or unknown.
pub fn resolve_language_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    if let Some(lang) = language_from_name(name) {
        return Some(lang.to_639_3().to_string());
    }

    normalize_to_part2t(name).ok()
}

/// Resolve an optional language name, falling back to `und`
pub fn language_code_or_undetermined(name: Option<&str>) -> String {
    match name.and_then(resolve_language_name) {
        Some(code) => code,
        None => {
            if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
                warn!(
                    "Unrecognized language '{}', using '{}'",
                    name.trim(),
                    UNDETERMINED_LANGUAGE
                );
            }
            UNDETERMINED_LANGUAGE.to_string()
        }
    }
}
