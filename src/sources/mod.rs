//! Catalog retrieval module split into submodules.
//!
//! The dialog consumes catalogs through the [`CatalogSource`] trait so the
//! host decides where main mods and add-ons come from. Provided
//! implementations: [`MemoryCatalog`] for embedded data and tests,
//! [`FileCatalog`] for JSON documents on disk, and [`RemoteCatalog`] for
//! HTTP endpoints.

use std::fmt;

use crate::state::{Addon, MainMod};

mod file;
mod memory;
mod remote;

pub use file::FileCatalog;
pub use memory::MemoryCatalog;
pub use remote::RemoteCatalog;

/// Supplier of the main-mod list and the add-on catalog.
///
/// Both fetches run synchronously inside the dialog's loading transition;
/// implementations should apply their own timeouts.
pub trait CatalogSource {
    /// Fetch the list of available main mods.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the backing store cannot be read or
    /// decoded.
    fn fetch_main_mods(&self) -> Result<Vec<MainMod>, CatalogError>;

    /// Fetch the full add-on catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the backing store cannot be read or
    /// decoded.
    fn fetch_addon_catalog(&self) -> Result<Vec<Addon>, CatalogError>;
}

/// What: Error type capturing catalog retrieval and decoding failures.
///
/// Inputs: Generated internally by catalog sources and the dialog's open
/// sequence.
///
/// Output: Implements `Display`/`Error` for ergonomic propagation.
///
/// Details:
/// - `Empty` covers the fetched-but-empty main-mod list, which aborts the
///   open sequence the same way a transport failure does.
/// - Wraps I/O errors, HTTP transport errors, non-success statuses, and
///   JSON decoding failures.
#[derive(Debug)]
pub enum CatalogError {
    /// The main-mod list came back empty.
    Empty,
    /// I/O error while reading a local catalog.
    Io(std::io::Error),
    /// HTTP transport error while fetching a remote catalog.
    Http(reqwest::Error),
    /// Remote endpoint answered with a non-success status.
    Status {
        /// URL that was requested.
        url: String,
        /// HTTP status code received.
        status: u16,
    },
    /// Catalog document did not decode as the expected JSON shape.
    Decode(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "failed to fetch the list of main mods"),
            Self::Io(err) => write!(f, "catalog read failed: {err}"),
            Self::Http(err) => write!(f, "catalog fetch failed: {err}"),
            Self::Status { url, status } => {
                write!(f, "catalog fetch failed: {url} answered {status}")
            }
            Self::Decode(err) => write!(f, "catalog decode failed: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Http(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Empty | Self::Status { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}
