//! Locale-compatibility and dependency filtering of the add-on catalog.

use std::collections::HashSet;

use crate::state::Addon;

/// Suffix appended to locale codes of machine-translated main mods. Stripped
/// before compatibility comparison so a machine-translated variant matches
/// add-ons declared for its human-translated base code.
pub const MACHINE_LOCALE_MARKER: &str = ".machine";

/// Strip the machine-translation marker from `locale`, if present.
#[must_use]
pub fn normalize_locale(locale: &str) -> &str {
    locale.strip_suffix(MACHINE_LOCALE_MARKER).unwrap_or(locale)
}

/// What: Compute the add-ons eligible for `locale`, in catalog order.
///
/// Inputs:
/// - `locale`: Locale of the chosen main mod (machine marker allowed).
/// - `catalog`: Full add-on catalog as supplied by the catalog source.
///
/// Output:
/// - Add-ons whose compatibility set is empty or contains the normalized
///   locale, and whose declared dependencies all name a locale-compatible
///   add-on.
///
/// Details:
/// - The dependency check is a single pass over the locale-compatible name
///   set; add-ons excluded by that same pass do not feed back into it, so
///   the check is one level deep rather than transitively closed.
/// - Pure function: no side effects, deterministic for equal inputs.
#[must_use]
pub fn eligible_addons(locale: &str, catalog: &[Addon]) -> Vec<Addon> {
    let locale = normalize_locale(locale);

    let locale_compatible: Vec<&Addon> = catalog
        .iter()
        .filter(|addon| {
            addon.compatible_mv_locale.is_empty()
                || addon.compatible_mv_locale.iter().any(|l| l == locale)
        })
        .collect();

    let known_names: HashSet<&str> = locale_compatible
        .iter()
        .map(|addon| addon.modname.as_str())
        .collect();

    let eligible: Vec<Addon> = locale_compatible
        .into_iter()
        .filter(|addon| {
            addon
                .dependent_modnames
                .iter()
                .all(|dep| known_names.contains(dep.as_str()))
        })
        .cloned()
        .collect();

    tracing::debug!(
        locale,
        catalog = catalog.len(),
        eligible = eligible.len(),
        "recomputed eligible add-on set"
    );
    eligible
}
