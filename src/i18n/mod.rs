//! Internationalization (i18n) module for Mercado.
//!
//! Provides static English/Spanish translation tables and lookup helpers.
//!
//! # Overview
//!
//! Unlike a file-based locale system, the full key set ships compiled into
//! the binary as two static tables (`translations`), flattened into
//! dot-notation keys (e.g. `header.weapons`). Lookup falls back from the
//! active language to English and finally to the key itself, so a missing
//! key is visible but never fatal.
//!
//! The selected language is persisted through [`crate::settings`]; the
//! `--lang` CLI flag overrides it for one session.

pub mod translations;

pub use translations::{TranslationMap, translate, translate_with_fallback};

use crate::state::Lang;

/// What: Get a translation for a given key in the active language.
///
/// Inputs:
/// - `lang`: Active display language
/// - `key`: Dot-notation key (e.g. `header.weapons`)
///
/// Output:
/// - Translated string, falling back to English and then the key itself.
#[must_use]
pub fn t(lang: Lang, key: &str) -> String {
    translate_with_fallback(key, translations::table(lang), translations::table(Lang::En))
}

/// What: Get a translation with format arguments.
///
/// Inputs:
/// - `lang`: Active display language
/// - `key`: Dot-notation key
/// - `args`: Format arguments (as Display trait objects)
///
/// Output:
/// - Formatted translated string
///
/// Details:
/// - Replaces placeholders in order: first `{}` gets first arg, etc.
#[must_use]
pub fn t_fmt(lang: Lang, key: &str, args: &[&dyn std::fmt::Display]) -> String {
    let mut result = t(lang, key);
    for arg in args {
        result = result.replacen("{}", &arg.to_string(), 1);
    }
    result
}

/// What: Get a translation with a single format argument (convenience).
#[must_use]
pub fn t_fmt1<T: std::fmt::Display>(lang: Lang, key: &str, arg: T) -> String {
    t_fmt(lang, key, &[&arg])
}
