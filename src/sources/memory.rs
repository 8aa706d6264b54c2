//! In-memory catalog source for embedded data and tests.

use crate::sources::{CatalogError, CatalogSource};
use crate::state::{Addon, MainMod};

/// Catalog source backed by vectors held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    /// Main mods returned by every fetch.
    main_mods: Vec<MainMod>,
    /// Add-ons returned by every fetch.
    addons: Vec<Addon>,
}

impl MemoryCatalog {
    /// Build a source over the given snapshots.
    #[must_use]
    pub const fn new(main_mods: Vec<MainMod>, addons: Vec<Addon>) -> Self {
        Self { main_mods, addons }
    }
}

impl CatalogSource for MemoryCatalog {
    fn fetch_main_mods(&self) -> Result<Vec<MainMod>, CatalogError> {
        Ok(self.main_mods.clone())
    }

    fn fetch_addon_catalog(&self) -> Result<Vec<Addon>, CatalogError> {
        Ok(self.addons.clone())
    }
}
