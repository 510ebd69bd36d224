//! The feet-to-pixel placement grid.
//!
//! Every user-facing measurement is in feet; every piece of canvas
//! geometry is in pixels. The conversion factor is fixed so the room
//! outline, grid lines, border tiles, and placed elements all agree.

/// Fixed conversion factor: 30 pixels per foot.
pub const PIXELS_PER_FOOT: f32 = 30.0;

/// Grid lines are drawn every 2 ft.
pub const GRID_STEP_FT: f32 = 2.0;

/// Convert a measurement in feet to canvas pixels.
#[must_use]
pub fn feet_to_px(feet: f32) -> f32 {
    feet * PIXELS_PER_FOOT
}

/// Convert a canvas pixel measurement back to feet.
#[must_use]
pub fn px_to_feet(px: f32) -> f32 {
    px / PIXELS_PER_FOOT
}

/// Format a pixel measurement as feet with one decimal place, e.g. `6.0ft`.
#[must_use]
pub fn format_feet(px: f32) -> String {
    format!("{:.1}ft", px_to_feet(px))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_exact() {
        assert_eq!(feet_to_px(15.0), 450.0);
        assert_eq!(feet_to_px(10.0), 300.0);
        assert_eq!(px_to_feet(450.0), 15.0);
    }

    #[test]
    fn test_round_trip() {
        for ft in [0.0, 0.5, 6.0, 7.0, 12.5] {
            assert!((px_to_feet(feet_to_px(ft)) - ft).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_format_one_decimal() {
        assert_eq!(format_feet(180.0), "6.0ft");
        assert_eq!(format_feet(45.0), "1.5ft");
        assert_eq!(format_feet(31.0), "1.0ft");
    }
}
