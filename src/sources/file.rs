//! Catalog source reading JSON documents from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::sources::{CatalogError, CatalogSource};
use crate::state::{Addon, MainMod};

/// Catalog source backed by two JSON files: an array of main mods and an
/// array of add-ons.
///
/// Useful for offline installs and for hosts that mirror the remote listing
/// locally.
#[derive(Clone, Debug)]
pub struct FileCatalog {
    /// Path of the main-mod listing.
    main_mods_path: PathBuf,
    /// Path of the add-on catalog.
    addons_path: PathBuf,
}

impl FileCatalog {
    /// Build a source over the given file paths.
    pub fn new(main_mods_path: impl Into<PathBuf>, addons_path: impl Into<PathBuf>) -> Self {
        Self {
            main_mods_path: main_mods_path.into(),
            addons_path: addons_path.into(),
        }
    }
}

/// Read `path` and decode it as a JSON value of type `T`.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

impl CatalogSource for FileCatalog {
    fn fetch_main_mods(&self) -> Result<Vec<MainMod>, CatalogError> {
        read_json(&self.main_mods_path)
    }

    fn fetch_addon_catalog(&self) -> Result<Vec<Addon>, CatalogError> {
        read_json(&self.addons_path)
    }
}
