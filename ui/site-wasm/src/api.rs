//! HTTP catalog client.
//!
//! Wraps `fetch` for the PokéAPI item endpoint and reads page-level
//! overrides for the catalog configuration.

use async_trait::async_trait;
use pw_api_types::CatalogItem;
use pw_catalog::{CatalogConfig, CatalogError, CatalogSource};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, Request, RequestInit, RequestMode, Response};

/// Build the catalog configuration.
///
/// Priority: `data-catalog-url` / `data-catalog-size` on `<body>` → built-in defaults.
pub fn catalog_config(body: &HtmlElement) -> CatalogConfig {
    CatalogConfig::default().with_overrides(
        body.get_attribute("data-catalog-url").as_deref(),
        body.get_attribute("data-catalog-size").as_deref(),
    )
}

/// `fetch`-backed [`CatalogSource`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchCatalog;

#[async_trait(?Send)]
impl CatalogSource for FetchCatalog {
    async fn fetch_item(&self, url: &str) -> Result<CatalogItem, CatalogError> {
        let text = get_text(url).await?;
        serde_json::from_str(&text).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

/// GET `url` and return the body text of a successful response.
pub async fn get_text(url: &str) -> Result<String, CatalogError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| CatalogError::Transport(format!("{:?}", e)))?;

    let window = gloo_utils::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| CatalogError::Transport(format!("fetch error: {:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| CatalogError::Transport("response is not a Response".to_string()))?;

    if !resp.ok() {
        return Err(CatalogError::Status(resp.status()));
    }

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| CatalogError::Decode(format!("{:?}", e)))?,
    )
    .await
    .map_err(|e| CatalogError::Decode(format!("text error: {:?}", e)))?;

    text.as_string()
        .ok_or_else(|| CatalogError::Decode("response body is not text".to_string()))
}
