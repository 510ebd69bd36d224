//! Placed furniture elements - the building blocks of a floor plan.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scale::px_to_feet;

/// Minimum element width/height in pixels. Resize gestures clamp here
/// so a handle can never collapse an element to nothing.
pub const MIN_ELEMENT_SIZE: f32 = 20.0;

/// Vertical gap between an element's top edge and its label baseline.
pub const LABEL_OFFSET: f32 = 18.0;

/// Unique identifier for a placed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One furniture glyph placed on the canvas.
///
/// Position, size, and rotation are independent scalars, each owned by
/// its own gesture; nothing here couples them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedElement {
    /// Unique identifier.
    pub id: ElementId,
    /// Display name, shown in the label above the element.
    pub title: String,
    /// Resolved image URI for the furniture glyph.
    pub src: String,
    /// Left edge in canvas pixels.
    pub x: f32,
    /// Top edge in canvas pixels.
    pub y: f32,
    /// Width in pixels, mutable via the right-edge handle.
    pub width: f32,
    /// Height in pixels, mutable via the bottom-edge handle.
    pub height: f32,
    /// Rotation in radians, quarter turns only.
    pub rotation: f32,
    /// Whether this element is the current selection.
    pub selected: bool,
}

impl PlacedElement {
    /// Create an element at the origin with the given title, image, and
    /// pixel footprint.
    #[must_use]
    pub fn new(title: impl Into<String>, src: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            id: ElementId::new(),
            title: title.into(),
            src: src.into(),
            x: 0.0,
            y: 0.0,
            width: width.max(MIN_ELEMENT_SIZE),
            height: height.max(MIN_ELEMENT_SIZE),
            rotation: 0.0,
            selected: false,
        }
    }

    /// Set the position, builder style.
    #[must_use]
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// The label text shown above the element: title on the first line,
    /// live dimensions in feet (one decimal) on the second.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{}\n({:.1}ft x {:.1}ft)",
            self.title,
            px_to_feet(self.width),
            px_to_feet(self.height)
        )
    }

    /// Anchor point for the label: horizontally centered above the
    /// element, tracking position and width as gestures move them.
    #[must_use]
    pub fn label_anchor(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y - LABEL_OFFSET)
    }

    /// Center of the element, the pivot for quarter-turn rotation.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point (in canvas coordinates) is within this element.
    ///
    /// Hit testing uses the unrotated bounding box; quarter turns keep
    /// the footprint close enough that the original did the same.
    #[must_use]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_formats_feet() {
        let bed = PlacedElement::new("Bed", "bed.png", 180.0, 210.0);
        assert_eq!(bed.label(), "Bed\n(6.0ft x 7.0ft)");
    }

    #[test]
    fn test_label_anchor_tracks_position_and_width() {
        let sofa = PlacedElement::new("Sofa", "sofa.png", 120.0, 60.0).at(40.0, 90.0);
        assert_eq!(sofa.label_anchor(), (100.0, 90.0 - LABEL_OFFSET));
    }

    #[test]
    fn test_new_clamps_footprint_to_minimum() {
        let tiny = PlacedElement::new("Dot", "dot.png", 4.0, 4.0);
        assert_eq!(tiny.width, MIN_ELEMENT_SIZE);
        assert_eq!(tiny.height, MIN_ELEMENT_SIZE);
    }

    #[test]
    fn test_contains_point() {
        let chair = PlacedElement::new("Chair", "chair.png", 60.0, 60.0).at(100.0, 100.0);
        assert!(chair.contains_point(130.0, 130.0));
        assert!(chair.contains_point(100.0, 100.0));
        assert!(!chair.contains_point(99.0, 130.0));
        assert!(!chair.contains_point(130.0, 161.0));
    }
}
