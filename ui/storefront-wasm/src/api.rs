//! HTTP catalog source.
//!
//! Fetches the static catalog document relative to the page URL.

use async_trait::async_trait;
use gloo_net::http::Request;
use sp_api_types::CatalogDocument;
use sp_catalog::{CatalogSource, FetchError};

pub struct HttpCatalogSource {
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<CatalogDocument, FetchError> {
        let resp = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(FetchError::Status {
                status: resp.status(),
                status_text: resp.status_text(),
            });
        }

        let text = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
