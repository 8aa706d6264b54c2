//! Catalog source fetching JSON documents over HTTP.

use std::sync::LazyLock;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::sources::{CatalogError, CatalogSource};
use crate::state::{Addon, MainMod};

/// Shared blocking HTTP client with connection pooling and bounded timeouts.
///
/// The fetch runs synchronously inside the dialog's loading transition, so
/// the timeouts also bound how long the host's busy indicator can stay up.
static HTTP_CLIENT: LazyLock<reqwest::blocking::Client> = LazyLock::new(|| {
    reqwest::blocking::Client::builder()
        .user_agent(concat!("modpicker/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(15))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default HTTP client");
            reqwest::blocking::Client::new()
        })
});

/// Catalog source backed by two HTTP endpoints serving JSON arrays.
#[derive(Clone, Debug)]
pub struct RemoteCatalog {
    /// Endpoint serving the main-mod listing.
    main_mods_url: String,
    /// Endpoint serving the add-on catalog.
    addons_url: String,
}

impl RemoteCatalog {
    /// Build a source over the given endpoint URLs.
    pub fn new(main_mods_url: impl Into<String>, addons_url: impl Into<String>) -> Self {
        Self {
            main_mods_url: main_mods_url.into(),
            addons_url: addons_url.into(),
        }
    }
}

/// Fetch `url` and decode the body as a JSON value of type `T`.
fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, CatalogError> {
    tracing::debug!(url, "fetching catalog document");
    let response = HTTP_CLIENT.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}

impl CatalogSource for RemoteCatalog {
    fn fetch_main_mods(&self) -> Result<Vec<MainMod>, CatalogError> {
        fetch_json(&self.main_mods_url)
    }

    fn fetch_addon_catalog(&self) -> Result<Vec<Addon>, CatalogError> {
        fetch_json(&self.addons_url)
    }
}
