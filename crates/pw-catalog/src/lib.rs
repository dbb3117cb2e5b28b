//! Random catalog item loading.
//!
//! The fetch/render flow is written against two seams: [`CatalogSource`]
//! performs the HTTP request and [`CatalogDisplay`] owns the visible state
//! (trigger button, display area). The browser crate implements both on top
//! of `fetch` and the DOM.

pub mod card;

use async_trait::async_trait;
use pw_api_types::CatalogItem;
use thiserror::Error;
use tracing::{debug, warn};

pub use card::CardView;

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2/pokemon/";
pub const DEFAULT_CATALOG_SIZE: u32 = 1025;
pub const DEFAULT_PLACEHOLDER_URL: &str =
    "https://placehold.co/300x220/E3350D/FFFFFF?text=IMAGEN+FALLIDA";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(String),
    #[error("catalog responded with status {0}")]
    Status(u16),
    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL; the item id is appended verbatim.
    pub api_url: String,
    pub catalog_size: u32,
    pub placeholder_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            catalog_size: DEFAULT_CATALOG_SIZE,
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_owned(),
        }
    }
}

impl CatalogConfig {
    /// Apply page-supplied overrides. Empty or unparsable values keep the
    /// defaults.
    pub fn with_overrides(mut self, api_url: Option<&str>, catalog_size: Option<&str>) -> Self {
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_url = if url.ends_with('/') {
                url.to_owned()
            } else {
                format!("{url}/")
            };
        }
        match catalog_size.map(|s| s.trim().parse::<u32>()) {
            Some(Ok(size)) if size > 0 => self.catalog_size = size,
            Some(_) => warn!("ignoring invalid catalog size override"),
            None => {}
        }
        self
    }

    pub fn item_url(&self, id: u32) -> String {
        format!("{}{}", self.api_url, id)
    }

    /// Map a uniform sample in `[0, 1)` onto `[1, catalog_size]`.
    pub fn pick_id(&self, unit: f64) -> u32 {
        let size = self.catalog_size.max(1);
        let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
        let offset = (unit * f64::from(size)).floor() as u32;
        offset.min(size - 1) + 1
    }
}

#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch_item(&self, url: &str) -> Result<CatalogItem, CatalogError>;
}

pub trait CatalogDisplay {
    fn set_trigger_enabled(&self, enabled: bool);
    fn show_loading(&self);
    fn show_error(&self, error: &CatalogError);
    fn show_card(&self, card: &CardView);
}

/// Fetch one item by id and render it.
///
/// The trigger is disabled for the duration of the request and re-enabled
/// on every outcome.
pub async fn load_item<S, D>(
    config: &CatalogConfig,
    source: &S,
    display: &D,
    id: u32,
) -> Result<CardView, CatalogError>
where
    S: CatalogSource + ?Sized,
    D: CatalogDisplay + ?Sized,
{
    let url = config.item_url(id);
    debug!(id, %url, "loading catalog item");

    display.show_loading();
    display.set_trigger_enabled(false);

    let result = source
        .fetch_item(&url)
        .await
        .map(|item| CardView::from_item(&item, &config.placeholder_url));

    match &result {
        Ok(card) => display.show_card(card),
        Err(err) => {
            warn!(id, "error loading catalog item: {}", err);
            display.show_error(err);
        }
    }

    display.set_trigger_enabled(true);
    result
}

/// Pick an id from `unit` (a uniform sample in `[0, 1)`) and load it.
pub async fn load_random_item<S, D>(
    config: &CatalogConfig,
    source: &S,
    display: &D,
    unit: f64,
) -> Result<CardView, CatalogError>
where
    S: CatalogSource + ?Sized,
    D: CatalogDisplay + ?Sized,
{
    let id = config.pick_id(unit);
    load_item(config, source, display, id).await
}
