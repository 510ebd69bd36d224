//! Grid lines and the measurement overlay.
//!
//! Stateless helpers deriving overlay geometry from the room's pixel
//! dimensions: interior grid lines every 2 ft, and dimension arrows
//! with foot labels along the top and left edges.

use floorplan_core::{feet_to_px, Room, GRID_STEP_FT};

/// One grid line segment, in room-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    /// Segment start.
    pub x1: f32,
    /// Segment start.
    pub y1: f32,
    /// Segment end.
    pub x2: f32,
    /// Segment end.
    pub y2: f32,
}

/// Interior grid lines, one every 2 ft in each direction. The room
/// outline itself is not part of the grid.
#[must_use]
pub fn grid_lines(room: &Room) -> Vec<GridLine> {
    let w = room.width_px();
    let h = room.height_px();
    let step = feet_to_px(GRID_STEP_FT);
    let mut lines = Vec::new();

    let mut x = step;
    while x < w {
        lines.push(GridLine {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: h,
        });
        x += step;
    }

    let mut y = step;
    while y < h {
        lines.push(GridLine {
            x1: 0.0,
            y1: y,
            x2: w,
            y2: y,
        });
        y += step;
    }

    lines
}

/// A dimension arrow spanning one full edge, with its foot label.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionArrow {
    /// Arrow start, in room-local coordinates.
    pub from: (f32, f32),
    /// Arrow end.
    pub to: (f32, f32),
    /// Label such as `15.0ft`, anchored at the arrow midpoint.
    pub label: String,
}

/// The measurement overlay: one dimension arrow along the top edge and
/// one along the left edge, offset into the border margin.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementOverlay {
    /// Horizontal arrow above the top edge.
    pub width_arrow: DimensionArrow,
    /// Vertical arrow left of the left edge.
    pub height_arrow: DimensionArrow,
}

/// How far outside the room edge the dimension arrows sit.
pub const ARROW_OFFSET: f32 = 26.0;

/// Compute the measurement overlay for a room.
#[must_use]
pub fn measurement_overlay(room: &Room) -> MeasurementOverlay {
    let w = room.width_px();
    let h = room.height_px();
    MeasurementOverlay {
        width_arrow: DimensionArrow {
            from: (0.0, -ARROW_OFFSET),
            to: (w, -ARROW_OFFSET),
            label: format!("{:.1}ft", room.width_ft),
        },
        height_arrow: DimensionArrow {
            from: (-ARROW_OFFSET, 0.0),
            to: (-ARROW_OFFSET, h),
            label: format!("{:.1}ft", room.height_ft),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::new(15.0, 10.0).expect("valid room")
    }

    #[test]
    fn test_grid_every_two_feet() {
        let lines = grid_lines(&room());
        // 15 ft wide: verticals at 2,4,...,14 ft (7 lines).
        // 10 ft high: horizontals at 2,4,6,8 ft (4 lines).
        let verticals: Vec<_> = lines.iter().filter(|l| l.x1 == l.x2).collect();
        let horizontals: Vec<_> = lines.iter().filter(|l| l.y1 == l.y2).collect();
        assert_eq!(verticals.len(), 7);
        assert_eq!(horizontals.len(), 4);
        assert_eq!(verticals[0].x1, 60.0);
        assert_eq!(horizontals[0].y1, 60.0);
    }

    #[test]
    fn test_grid_lines_span_the_room() {
        for line in grid_lines(&room()) {
            if line.x1 == line.x2 {
                assert_eq!((line.y1, line.y2), (0.0, 300.0));
            } else {
                assert_eq!((line.x1, line.x2), (0.0, 450.0));
            }
        }
    }

    #[test]
    fn test_overlay_labels_in_feet() {
        let overlay = measurement_overlay(&room());
        assert_eq!(overlay.width_arrow.label, "15.0ft");
        assert_eq!(overlay.height_arrow.label, "10.0ft");
        assert_eq!(overlay.width_arrow.to.0, 450.0);
        assert_eq!(overlay.height_arrow.to.1, 300.0);
    }
}
