//! The decorative brick border around the room.
//!
//! Pure geometry: a run of fixed-size tiles is laid along each edge of
//! the room rectangle, just outside it, with the trailing tile clipped
//! to the edge length. Everything is derived from the room's pixel
//! dimensions; there is no state and no interactivity.

use floorplan_core::Room;

/// Length of one border tile along its edge, in pixels.
pub const TILE_LENGTH: f32 = 30.0;
/// Thickness of the border run, in pixels.
pub const TILE_THICKNESS: f32 = 12.0;
/// Gap between adjacent tiles, in pixels.
pub const TILE_GAP: f32 = 4.0;

/// One border tile, in room-local coordinates (the room occupies
/// `[0, width_px] x [0, height_px]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderTile {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Tile width.
    pub width: f32,
    /// Tile height.
    pub height: f32,
}

/// Compute the full border: tile runs along all four edges.
#[must_use]
pub fn border_tiles(room: &Room) -> Vec<BorderTile> {
    let w = room.width_px();
    let h = room.height_px();
    let mut tiles = Vec::new();

    // Top and bottom runs: horizontal tiles.
    for (start, length) in run_offsets(w) {
        tiles.push(BorderTile {
            x: start,
            y: -TILE_THICKNESS,
            width: length,
            height: TILE_THICKNESS,
        });
        tiles.push(BorderTile {
            x: start,
            y: h,
            width: length,
            height: TILE_THICKNESS,
        });
    }

    // Left and right runs: vertical tiles.
    for (start, length) in run_offsets(h) {
        tiles.push(BorderTile {
            x: -TILE_THICKNESS,
            y: start,
            width: TILE_THICKNESS,
            height: length,
        });
        tiles.push(BorderTile {
            x: w,
            y: start,
            width: TILE_THICKNESS,
            height: length,
        });
    }

    tiles
}

/// Offsets and lengths of the tiles along one edge. The last tile is
/// clipped so the run never overshoots the edge.
fn run_offsets(edge: f32) -> Vec<(f32, f32)> {
    let mut offsets = Vec::new();
    let mut pos = 0.0;
    while pos < edge {
        let length = TILE_LENGTH.min(edge - pos);
        // Skip slivers thinner than the gap.
        if length > TILE_GAP {
            offsets.push((pos, length));
        }
        pos += TILE_LENGTH + TILE_GAP;
    }
    offsets
}
