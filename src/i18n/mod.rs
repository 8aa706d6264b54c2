//! Locale naming for the dialog.
//!
//! The locale picker shows `"<version> <human-readable name>"` per main mod;
//! the human-readable part comes from a [`LocaleNames`] collaborator. The
//! built-in implementation covers the locale codes the mod listing uses and
//! falls back to the raw code for anything unknown, so a new locale in the
//! catalog degrades to its code instead of an error.

mod detection;

pub use detection::detect_system_locale;

use crate::logic::normalize_locale;

/// Resolver of human-readable locale display names.
pub trait LocaleNames {
    /// Display name for `locale` (e.g., "en" -> "English").
    fn display_name(&self, locale: &str) -> String;
}

/// Native-language display names for the locale codes the mod listing uses.
const LOCALE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("ko", "한국어"),
    ("zh", "简体中文"),
    ("zh-Hant", "繁體中文"),
    ("ja", "日本語"),
    ("ru", "Русский"),
    ("de", "Deutsch"),
    ("fr", "Français"),
    ("es", "Español"),
    ("pt", "Português"),
    ("it", "Italiano"),
    ("pl", "Polski"),
    ("tr", "Türkçe"),
    ("cs", "Čeština"),
];

/// Built-in [`LocaleNames`] over the static table.
///
/// Machine-translated variants resolve through their base code and are
/// marked as machine translations in the returned name.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinLocaleNames;

impl LocaleNames for BuiltinLocaleNames {
    fn display_name(&self, locale: &str) -> String {
        let base = normalize_locale(locale);
        let name = LOCALE_NAMES
            .iter()
            .find(|(code, _)| *code == base)
            .map_or(base, |(_, name)| *name);
        if base == locale {
            name.to_string()
        } else {
            format!("{name} (machine translation)")
        }
    }
}
