//! Install-dialog controller (composition root).
//!
//! Owns the session state for one dialog: the fetched catalog snapshot, the
//! chosen locale, the eligible add-on set, the pager over it, and the
//! id-keyed selection. User actions arrive as method calls from the host's
//! event layer; the host renders by pulling [`InstallDialog::locale_options`],
//! [`InstallDialog::visible_rows`], [`InstallDialog::page_label`], and
//! [`InstallDialog::description`] after each action, which keeps the
//! presentation layer a stateless view over this state.

use std::collections::HashSet;

use crate::i18n::LocaleNames;
use crate::logic::eligible_addons;
use crate::metadata::{MetadataStore, render_metadata_text};
use crate::sources::{CatalogError, CatalogSource};
use crate::state::{Addon, DialogPhase, DialogResult, MainMod, ModId, Pager, Selection};

/// Severity attached to a message sent to the host's error surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Informational notice.
    Info,
    /// Recoverable problem worth surfacing.
    Warning,
    /// Failure that ended the current operation.
    Error,
}

/// Fire-and-forget sink for user-visible failure messages (the host's
/// snackbar, toast, or status line). The return value is never consulted.
pub trait ErrorSink {
    /// Deliver `message` at `severity`.
    fn report(&mut self, severity: Severity, message: &str);
}

/// Read-only configuration snapshot handed to the dialog at construction
/// time, instead of a hidden global lookup at open time.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct DialogConfig {
    /// The application's configured locale, preferred as the default main
    /// mod locale when it is present among the fetched ones.
    #[serde(default)]
    pub app_locale: Option<String>,
}

/// One entry of the locale picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleOption {
    /// Locale code, the value reported back on selection.
    pub locale: String,
    /// Display label: `"<version> <human-readable locale name>"`.
    pub label: String,
}

/// One add-on row on the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleRow {
    /// Add-on id, the value toggles are keyed by.
    pub id: ModId,
    /// Checkbox label: the metadata title, or the mod name when the
    /// metadata store has no record.
    pub title: String,
    /// Checkbox initial value from the selection state.
    pub checked: bool,
}

/// Callback invoked exactly once per confirmed session with the chosen
/// locale and the checked add-on ids.
type InstallCallback = Box<dyn FnMut(&str, &[ModId])>;

/// Controller for one install dialog.
///
/// All state is owned exclusively by this instance for the lifetime of one
/// session; nothing is shared or persisted across sessions except the locale
/// picker value, which survives re-opens the way a retained widget would.
pub struct InstallDialog {
    catalog: Box<dyn CatalogSource>,
    metadata: Box<dyn MetadataStore>,
    locale_names: Box<dyn LocaleNames>,
    error_sink: Option<Box<dyn ErrorSink>>,
    on_install: Option<InstallCallback>,
    config: DialogConfig,

    phase: DialogPhase,
    main_mods: Vec<MainMod>,
    addon_catalog: Vec<Addon>,
    locale: Option<String>,
    eligible: Vec<Addon>,
    pager: Pager,
    selection: Selection,
    description: String,
}

impl InstallDialog {
    /// Build a dialog over the given collaborators and configuration.
    pub fn new(
        catalog: impl CatalogSource + 'static,
        metadata: impl MetadataStore + 'static,
        locale_names: impl LocaleNames + 'static,
        config: DialogConfig,
    ) -> Self {
        Self {
            catalog: Box::new(catalog),
            metadata: Box::new(metadata),
            locale_names: Box::new(locale_names),
            error_sink: None,
            on_install: None,
            config,
            phase: DialogPhase::Closed,
            main_mods: Vec::new(),
            addon_catalog: Vec::new(),
            locale: None,
            eligible: Vec::new(),
            pager: Pager::default(),
            selection: Selection::default(),
            description: String::new(),
        }
    }

    /// Attach the host's error surface.
    #[must_use]
    pub fn with_error_sink(mut self, sink: impl ErrorSink + 'static) -> Self {
        self.error_sink = Some(Box::new(sink));
        self
    }

    /// Register the install callback invoked on confirm.
    #[must_use]
    pub fn with_install_callback(mut self, callback: impl FnMut(&str, &[ModId]) + 'static) -> Self {
        self.on_install = Some(Box::new(callback));
        self
    }

    /// What: Begin a session: fetch the catalog and enter `Ready`.
    ///
    /// Inputs:
    /// - None; collaborators were supplied at construction.
    ///
    /// Output:
    /// - On success the phase is `Ready` with the default locale chosen and
    ///   the first page computed. An empty main-mod list or a fetch failure
    ///   is reported to the error sink and the session ends `Cancelled`
    ///   without invoking the install callback.
    ///
    /// Details:
    /// - Both fetches run synchronously; the host is expected to show a busy
    ///   indicator around this call.
    /// - Default locale: the previous session's pick if still offered, else
    ///   the configured application locale if offered, else the first
    ///   fetched main mod's locale.
    pub fn open(&mut self) {
        if matches!(self.phase, DialogPhase::Loading | DialogPhase::Ready) {
            return;
        }
        self.phase = DialogPhase::Loading;
        self.selection = Selection::default();
        self.description.clear();
        tracing::info!("opening install dialog");

        let main_mods = match self.catalog.fetch_main_mods() {
            Ok(mods) if mods.is_empty() => {
                self.abort_open(&CatalogError::Empty);
                return;
            }
            Ok(mods) => mods,
            Err(err) => {
                self.abort_open(&err);
                return;
            }
        };
        let addon_catalog = match self.catalog.fetch_addon_catalog() {
            Ok(catalog) => catalog,
            Err(err) => {
                self.abort_open(&err);
                return;
            }
        };
        self.main_mods = main_mods;
        self.addon_catalog = addon_catalog;

        let offered: Vec<&str> = self.main_mods.iter().map(|m| m.locale.as_str()).collect();
        let keep_current = self
            .locale
            .as_deref()
            .filter(|current| offered.contains(current));
        let locale = keep_current
            .or_else(|| {
                self.config
                    .app_locale
                    .as_deref()
                    .filter(|preferred| offered.contains(preferred))
            })
            .unwrap_or(offered[0])
            .to_string();
        self.locale = Some(locale);

        self.phase = DialogPhase::Ready;
        self.refresh_eligible();
        tracing::info!(
            main_mods = self.main_mods.len(),
            addons = self.addon_catalog.len(),
            locale = self.locale.as_deref().unwrap_or_default(),
            "install dialog ready"
        );
    }

    /// Report a failed open to the error sink and auto-close as cancelled.
    fn abort_open(&mut self, err: &CatalogError) {
        tracing::warn!(error = %err, "install dialog open aborted");
        if let Some(sink) = self.error_sink.as_mut() {
            sink.report(Severity::Error, &err.to_string());
        }
        self.phase = DialogPhase::Cancelled;
    }

    /// Recompute the eligible set for the current locale, reset the pager,
    /// and reconcile the selection, as one refresh.
    fn refresh_eligible(&mut self) {
        let locale = self.locale.as_deref().unwrap_or_default();
        self.eligible = eligible_addons(locale, &self.addon_catalog);
        self.pager.reset();
        let eligible_ids: HashSet<ModId> = self.eligible.iter().map(|a| a.id).collect();
        self.selection.reconcile(&eligible_ids);
    }

    /// What: Switch the session to another main-mod locale.
    ///
    /// Inputs:
    /// - `locale`: The newly picked locale code.
    ///
    /// Output:
    /// - Eligible set recomputed, page reset to the first, selections for
    ///   now-ineligible add-ons dropped. The description pane shows the
    ///   matching main mod's metadata; no matching main mod or metadata is a
    ///   silent no-op.
    pub fn set_locale(&mut self, locale: &str) {
        if self.phase != DialogPhase::Ready {
            return;
        }
        self.locale = Some(locale.to_string());
        self.refresh_eligible();

        let text = self
            .main_mods
            .iter()
            .find(|m| m.locale == locale)
            .and_then(|m| self.metadata.lookup(m.id))
            .map(|record| render_metadata_text(&record));
        if let Some(text) = text {
            self.description = text;
        }
    }

    /// Flip the checked state of the add-on `id` and show its metadata in
    /// the description pane. Nothing else is recomputed.
    pub fn toggle_addon(&mut self, id: ModId) {
        if self.phase != DialogPhase::Ready {
            return;
        }
        self.selection.toggle(id);
        if let Some(record) = self.metadata.lookup(id) {
            self.description = render_metadata_text(&record);
        }
    }

    /// Move the page by `delta`. Out-of-bounds moves are rejected with no
    /// state change; returns whether the page changed.
    pub fn turn_page(&mut self, delta: isize) -> bool {
        if self.phase != DialogPhase::Ready {
            return false;
        }
        self.pager.navigate(delta, self.eligible.len())
    }

    /// What: Confirm the session and emit the result.
    ///
    /// Inputs:
    /// - None; the result is assembled from the current state.
    ///
    /// Output:
    /// - Invokes the install callback with `(locale, checked ids)` and
    ///   returns the same data; `None` when the dialog is not `Ready`. The
    ///   ids come in eligible-set order.
    pub fn confirm(&mut self) -> Option<DialogResult> {
        if self.phase != DialogPhase::Ready {
            return None;
        }
        let locale = self.locale.clone().unwrap_or_default();
        let selected_ids: Vec<ModId> = self
            .eligible
            .iter()
            .map(|a| a.id)
            .filter(|id| self.selection.is_selected(*id))
            .collect();
        tracing::info!(locale = %locale, selected = ?selected_ids, "install confirmed");
        if let Some(callback) = self.on_install.as_mut() {
            callback(&locale, &selected_ids);
        }
        self.phase = DialogPhase::Confirmed;
        Some(DialogResult {
            locale,
            selected_ids,
        })
    }

    /// Close the session without installing; the install callback is not
    /// invoked.
    pub fn cancel(&mut self) {
        if self.phase != DialogPhase::Ready {
            return;
        }
        tracing::info!("install dialog cancelled");
        self.phase = DialogPhase::Cancelled;
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> DialogPhase {
        self.phase
    }

    /// Currently picked locale, if a session has chosen one.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Entries for the locale picker, one per fetched main mod.
    #[must_use]
    pub fn locale_options(&self) -> Vec<LocaleOption> {
        self.main_mods
            .iter()
            .map(|m| LocaleOption {
                locale: m.locale.clone(),
                label: format!("{} {}", m.version, self.locale_names.display_name(&m.locale)),
            })
            .collect()
    }

    /// One-based "current/total" page indicator text.
    #[must_use]
    pub fn page_label(&self) -> String {
        self.pager.label(self.eligible.len())
    }

    /// Zero-based index of the page currently shown.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// Number of add-ons eligible for the current locale.
    #[must_use]
    pub fn eligible_count(&self) -> usize {
        self.eligible.len()
    }

    /// Rows for the current page, with checkbox labels and initial values.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        self.eligible
            .iter()
            .enumerate()
            .filter(|(i, _)| self.pager.is_visible(*i))
            .map(|(_, addon)| VisibleRow {
                id: addon.id,
                title: self
                    .metadata
                    .lookup(addon.id)
                    .map_or_else(|| addon.modname.clone(), |record| record.title),
                checked: self.selection.is_selected(addon.id),
            })
            .collect()
    }

    /// Checked add-on ids in eligible-set order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<ModId> {
        self.eligible
            .iter()
            .map(|a| a.id)
            .filter(|id| self.selection.is_selected(*id))
            .collect()
    }

    /// Current description-pane text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
