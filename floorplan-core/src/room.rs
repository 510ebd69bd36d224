//! Room dimensions and the derived pixel-space rectangle.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::scale::feet_to_px;

/// A rectangular room, dimensioned in feet.
///
/// Pixel dimensions are always derived as `feet * 30` and never stored,
/// so the two unit systems cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Room width in feet.
    pub width_ft: f32,
    /// Room height (depth) in feet.
    pub height_ft: f32,
}

impl Room {
    /// Create a room from dimensions in feet.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is non-finite or not
    /// strictly positive.
    pub fn new(width_ft: f32, height_ft: f32) -> PlanResult<Self> {
        validate_dimension("width", width_ft)?;
        validate_dimension("height", height_ft)?;
        Ok(Self {
            width_ft,
            height_ft,
        })
    }

    /// Parse a room from user-entered dimension text.
    ///
    /// The original input fields accepted arbitrary text; anything that
    /// does not parse to a positive finite number is rejected here
    /// instead of letting NaN leak into the pixel geometry.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending field and input.
    pub fn parse(width: &str, height: &str) -> PlanResult<Self> {
        let width_ft = parse_dimension("width", width)?;
        let height_ft = parse_dimension("height", height)?;
        Self::new(width_ft, height_ft)
    }

    /// Room width in canvas pixels.
    #[must_use]
    pub fn width_px(&self) -> f32 {
        feet_to_px(self.width_ft)
    }

    /// Room height in canvas pixels.
    #[must_use]
    pub fn height_px(&self) -> f32 {
        feet_to_px(self.height_ft)
    }
}

impl Default for Room {
    /// A 15 ft x 10 ft room, the size the canvas opens with.
    fn default() -> Self {
        Self {
            width_ft: 15.0,
            height_ft: 10.0,
        }
    }
}

fn parse_dimension(field: &'static str, input: &str) -> PlanResult<f32> {
    let value: f32 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidDimension {
            field,
            input: input.to_string(),
        })?;
    validate_dimension(field, value)?;
    Ok(value)
}

fn validate_dimension(field: &'static str, value: f32) -> PlanResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidDimension {
            field,
            input: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_dimensions_exact() {
        let room = Room::new(15.0, 10.0).expect("valid room");
        assert_eq!(room.width_px(), 450.0);
        assert_eq!(room.height_px(), 300.0);
    }

    #[test]
    fn test_parse_accepts_numeric_text() {
        let room = Room::parse("12", " 9.5 ").expect("parses");
        assert_eq!(room.width_ft, 12.0);
        assert_eq!(room.height_ft, 9.5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = Room::parse("abc", "10").expect_err("must reject");
        match err {
            PlanError::InvalidDimension { field, input } => {
                assert_eq!(field, "width");
                assert_eq!(input, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_non_positive_and_nan() {
        assert!(Room::new(0.0, 10.0).is_err());
        assert!(Room::new(10.0, -3.0).is_err());
        assert!(Room::new(f32::NAN, 10.0).is_err());
        assert!(Room::parse("inf", "10").is_err());
    }
}
