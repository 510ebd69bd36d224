//! Randomized initial placement of palette assets.
//!
//! A tapped palette asset spawns at a uniformly sampled position inside
//! the room, reduced by the item's own footprint so the whole glyph
//! starts within bounds. There is no collision avoidance with existing
//! elements. The random source is a parameter so tests can pass a
//! seeded generator.

use rand::Rng;
use url::Url;

use crate::catalog::FurnitureAsset;
use crate::element::PlacedElement;
use crate::error::PlanResult;
use crate::room::Room;

/// Sample an initial top-left position for an item of the given pixel
/// footprint, uniform over `[0, room - item]` per axis.
///
/// If the item is larger than the room on an axis, the range collapses
/// and the item spawns at 0 on that axis.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    room: &Room,
    item_width: f32,
    item_height: f32,
) -> (f32, f32) {
    (
        sample_axis(rng, room.width_px() - item_width),
        sample_axis(rng, room.height_px() - item_height),
    )
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(0.0..=max)
    } else {
        0.0
    }
}

/// Spawn a [`PlacedElement`] for a palette asset: resolve its image
/// against the media base, size it from its foot footprint, and place
/// it at a random position inside the room.
///
/// # Errors
///
/// Returns an error if the asset's file path cannot be resolved.
pub fn spawn_element<R: Rng + ?Sized>(
    rng: &mut R,
    room: &Room,
    media_base: &Url,
    asset: &FurnitureAsset,
) -> PlanResult<PlacedElement> {
    let src = asset.resolve_src(media_base)?;
    let (width, height) = asset.footprint_px();
    let (x, y) = spawn_position(rng, room, width, height);
    Ok(PlacedElement::new(asset.title.clone(), src.to_string(), width, height).at(x, y))
}
