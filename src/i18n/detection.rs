//! System locale detection utilities.
//!
//! Hosts can seed `DialogConfig::app_locale` from the environment with
//! [`detect_system_locale`] instead of reading globals inside the dialog.

use std::env;

/// What: Detect the system locale language code from environment variables.
///
/// Inputs:
/// - None (reads from environment)
///
/// Output:
/// - `Option<String>` containing a bare language code (e.g., "de") or None
///   if not detectable
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES`, and `LANG` in order
/// - Reduces locale strings like "de_DE.UTF-8" to the language code the mod
///   listing uses ("de")
/// - "C" and "POSIX" are not languages and yield None
pub fn detect_system_locale() -> Option<String> {
    let locale_vars = ["LC_ALL", "LC_MESSAGES", "LANG"];

    for var_name in &locale_vars {
        if let Ok(locale_str) = env::var(var_name)
            && let Some(parsed) = parse_locale_string(&locale_str)
        {
            return Some(parsed);
        }
    }

    None
}

/// Reduce an environment locale string to a bare lowercase language code.
fn parse_locale_string(locale_str: &str) -> Option<String> {
    let trimmed = locale_str.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Drop encoding and modifier suffixes ("de_DE.UTF-8", "de_DE@euro")
    let locale_part = trimmed.split(['.', '@']).next()?;

    // Keep only the language segment of "de_DE" / "de-DE"
    let language = locale_part.split(['_', '-']).next()?.to_lowercase();
    if language.is_empty() {
        return None;
    }
    if language == "c" || language == "posix" {
        return None;
    }
    Some(language)
}
