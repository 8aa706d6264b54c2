//! Core value types used by the dialog: catalog entities, metadata records,
//! and the session lifecycle phase.

/// Identifier shared by main mods and add-ons.
///
/// Metadata lookups accept either kind of id, so both entities draw from the
/// same numeric namespace.
pub type ModId = u64;

/// A localized base installable unit. Exactly one is selected per dialog
/// session.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MainMod {
    /// Catalog identifier, also the key for metadata lookups.
    pub id: ModId,
    /// Locale code this main mod is translated into (e.g., "en" or
    /// "ru.machine" for a machine-translated variant).
    pub locale: String,
    /// Version string as reported by the catalog.
    pub version: String,
}

/// An optional installable unit with locale-compatibility and inter-add-on
/// dependency constraints.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Addon {
    /// Catalog identifier, also the key for metadata lookups.
    pub id: ModId,
    /// Internal mod name; the handle other add-ons use to declare a
    /// dependency on this one.
    pub modname: String,
    /// Locale codes this add-on is compatible with. Empty means compatible
    /// with every locale.
    #[serde(default)]
    pub compatible_mv_locale: Vec<String>,
    /// Mod names (not ids) of other add-ons that must be present in the same
    /// eligible set.
    #[serde(default)]
    pub dependent_modnames: Vec<String>,
}

/// Descriptive metadata for a main mod or add-on, used for the checkbox label
/// and the free-text description pane.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct MetadataRecord {
    /// Display title.
    pub title: String,
    /// Version string (may be empty when the store has none).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    /// Author names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    /// Upstream project URL (may be empty if unknown).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Long description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Lifecycle phase of one dialog session.
///
/// The controller moves `Closed -> Loading -> Ready` on a successful open,
/// and from `Ready` to one of the terminal phases on confirm or cancel. A
/// failed open skips `Ready` and lands on `Cancelled` directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogPhase {
    /// No session in progress.
    #[default]
    Closed,
    /// Catalog fetch in progress.
    Loading,
    /// Catalog loaded; user actions are accepted.
    Ready,
    /// Session ended with the install callback invoked.
    Confirmed,
    /// Session ended without invoking the install callback.
    Cancelled,
}

/// Outcome of a confirmed session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogResult {
    /// Locale of the chosen main mod, exactly as listed in the catalog
    /// (machine marker included when present).
    pub locale: String,
    /// Ids of the add-ons that were checked at confirm time, in eligible-set
    /// order.
    pub selected_ids: Vec<ModId>,
}
