//! HTTP catalog source.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::domain::Catalog;
use crate::error::{FetchError, Result};
use crate::port::CatalogSource;

/// Fetches the quote catalog from a fixed HTTP endpoint.
///
/// The whole catalog comes back in one GET; there is no pagination or ETag
/// negotiation on the source. A hard timeout bounds the request so a dead
/// network degrades to the cache path instead of hanging the refresh.
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Request)?;
        Ok(Self { client, url })
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Catalog> {
        info!(url = %self.url, "Fetching quote catalog");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16() }.into());
        }

        let catalog: Catalog = response.json().await.map_err(FetchError::Decode)?;
        debug!(count = catalog.len(), "Fetched catalog");

        Ok(catalog)
    }
}
