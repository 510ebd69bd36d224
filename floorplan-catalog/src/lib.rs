//! # Floorplan Catalog
//!
//! Client for the remote furniture catalog: `GET /assets/room/{room_id}`
//! returns the palette of placeable assets for a room type, each with
//! its real-world footprint in feet and an image path relative to the
//! media base URL.
//!
//! A fetch failure is not fatal anywhere in the composer - callers log
//! it and show an empty palette; [`CatalogClient::fetch_or_empty`] wraps
//! that policy.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use floorplan_core::FurnitureAsset;
use reqwest::Client;
use thiserror::Error;
use url::Url;

/// Errors that can occur while talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured base URL is invalid.
    #[error("invalid catalog base URL: {0}")]
    InvalidUrl(String),

    /// HTTP layer failed (connection, timeout, etc.).
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("catalog returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not a valid asset array.
    #[error("failed to decode catalog response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Asynchronous client for the furniture catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a client for the given API base URL, e.g.
    /// `https://api.example.com/`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidUrl`] if the URL is malformed or
    /// cannot serve as a base.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, CatalogError> {
        let url = Url::parse(base_url.as_ref()).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(CatalogError::InvalidUrl(url.to_string()));
        }
        Ok(Self {
            http: Client::new(),
            base_url: url,
        })
    }

    /// Fetch the palette assets available for a room type.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, a non-success status, or
    /// an undecodable body. No retry policy is applied.
    pub async fn fetch_room_assets(&self, room_id: u64) -> Result<Vec<FurnitureAsset>, CatalogError> {
        let mut url = self.base_url.clone();
        {
            // cannot_be_a_base was rejected in new(), so this cannot fail
            let mut segments = url.path_segments_mut().map_err(|()| {
                CatalogError::InvalidUrl(self.base_url.to_string())
            })?;
            segments.pop_if_empty();
            segments.extend(["assets", "room", &room_id.to_string()]);
        }

        tracing::debug!(%url, room_id, "fetching palette assets");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let assets: Vec<FurnitureAsset> = response.json().await.map_err(CatalogError::Decode)?;
        tracing::debug!(room_id, count = assets.len(), "palette assets fetched");
        Ok(assets)
    }

    /// Fetch the palette, degrading to an empty list on any failure.
    /// The error is logged; "fetch failed" and "no assets for this
    /// room" look the same to the palette.
    pub async fn fetch_or_empty(&self, room_id: u64) -> Vec<FurnitureAsset> {
        match self.fetch_room_assets(room_id).await {
            Ok(assets) => assets,
            Err(e) => {
                tracing::warn!(room_id, error = %e, "palette fetch failed, showing empty palette");
                Vec::new()
            }
        }
    }
}
