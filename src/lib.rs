//! Install-dialog core for picking a localized main mod and a compatible set
//! of add-ons.
//!
//! The host application owns the window chrome and widgets; this crate owns
//! the part with invariants: which add-ons are eligible for a locale (locale
//! compatibility plus dependency gating), a stable paged view over that set,
//! and an id-keyed selection that survives page turns and locale changes.
//! The [`dialog::InstallDialog`] controller wires those together and talks to
//! the host through small collaborator traits: a [`sources::CatalogSource`]
//! for the mod listing, a [`metadata::MetadataStore`] for titles and
//! description text, [`i18n::LocaleNames`] for the locale picker labels, an
//! [`dialog::ErrorSink`] for failures, and an install callback fired once per
//! confirmed session.
//!
//! Logging goes through `tracing`; the host decides whether and where to
//! subscribe.

pub mod dialog;
pub mod i18n;
pub mod logic;
pub mod metadata;
pub mod sources;
pub mod state;

pub use dialog::{DialogConfig, ErrorSink, InstallDialog, LocaleOption, Severity, VisibleRow};
pub use state::{Addon, DialogPhase, DialogResult, MainMod, ModId};
