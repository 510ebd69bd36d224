//! Palette asset types - the serde model of the remote furniture
//! catalog.
//!
//! The wire format is an array of `{id, title, file, width, length}`
//! objects; `width`/`length` are the real-world footprint in feet and
//! `file` is a path resolved against the media base URL.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PlanError, PlanResult};
use crate::scale::feet_to_px;

/// One selectable furniture asset from the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureAsset {
    /// Catalog identifier.
    pub id: u64,
    /// Display name, copied onto spawned elements.
    pub title: String,
    /// Image path, relative to the media base URL.
    pub file: String,
    /// Real-world width in feet.
    pub width: f32,
    /// Real-world depth in feet.
    pub length: f32,
}

impl FurnitureAsset {
    /// Pixel footprint of a freshly spawned element for this asset.
    #[must_use]
    pub fn footprint_px(&self) -> (f32, f32) {
        (feet_to_px(self.width), feet_to_px(self.length))
    }

    /// Resolve the relative `file` path against the media base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL is invalid.
    pub fn resolve_src(&self, media_base: &Url) -> PlanResult<Url> {
        media_base
            .join(&self.file)
            .map_err(|e| PlanError::InvalidAssetUrl(format!("{}: {e}", self.file)))
    }
}
