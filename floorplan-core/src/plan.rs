//! The floor plan - single owner of the placed-element list.

use std::f32::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::element::{ElementId, PlacedElement};
use crate::error::{PlanError, PlanResult};
use crate::room::Room;
use crate::viewport::Viewport;

/// A floor plan: the room, the viewport, and every placed element.
///
/// Elements are kept in insertion order; that order is also the paint
/// order, so the most recently added element sits on top. All mutation
/// goes through this type - the palette adds, the delete affordance
/// removes, gestures write through [`crate::gesture`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlan {
    /// The room rectangle, in feet.
    pub room: Room,
    /// Pan/zoom state of the hosting viewport.
    pub viewport: Viewport,
    /// All placed elements, in insertion (= paint) order.
    elements: Vec<PlacedElement>,
    /// The sole selected element, if any. Last tap wins.
    selected: Option<ElementId>,
}

impl FloorPlan {
    /// Create an empty plan for the given room and viewport size.
    #[must_use]
    pub fn new(room: Room, view_width: f32, view_height: f32) -> Self {
        Self {
            room,
            viewport: Viewport::new(view_width, view_height),
            elements: Vec::new(),
            selected: None,
        }
    }

    /// Replace the room dimensions.
    ///
    /// Pixel geometry is derived, so the outline, grid, and border all
    /// recompute from here; the pan is re-bounded against the new size.
    pub fn set_room(&mut self, room: Room) {
        self.room = room;
        self.viewport.bound_pan(&self.room);
    }

    /// Add an element to the plan. Returns its ID.
    pub fn add_element(&mut self, element: PlacedElement) -> ElementId {
        let id = element.id;
        tracing::debug!(%id, title = %element.title, "element placed");
        self.elements.push(element);
        id
    }

    /// Remove an element from the plan, preserving the relative order
    /// of the survivors.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not found.
    pub fn remove_element(&mut self, id: ElementId) -> PlanResult<PlacedElement> {
        let index = self
            .elements
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| PlanError::ElementNotFound(id.to_string()))?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(self.elements.remove(index))
    }

    /// Get an element by ID.
    #[must_use]
    pub fn get_element(&self, id: ElementId) -> Option<&PlacedElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an element by ID.
    pub fn get_element_mut(&mut self, id: ElementId) -> Option<&mut PlacedElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// All elements in paint order.
    pub fn elements(&self) -> impl Iterator<Item = &PlacedElement> {
        self.elements.iter()
    }

    /// Number of placed elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Check if the plan has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Select an element, deselecting whatever was selected before.
    /// Only one element shows its resize/rotate/delete handles at a
    /// time.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not found.
    pub fn select(&mut self, id: ElementId) -> PlanResult<()> {
        if !self.elements.iter().any(|e| e.id == id) {
            return Err(PlanError::ElementNotFound(id.to_string()));
        }
        self.apply_selection(id);
        Ok(())
    }

    /// Make `id` the sole selection. Callers have already verified the
    /// element is present.
    fn apply_selection(&mut self, id: ElementId) {
        for element in &mut self.elements {
            element.selected = element.id == id;
        }
        self.selected = Some(id);
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) {
        for element in &mut self.elements {
            element.selected = false;
        }
        self.selected = None;
    }

    /// The currently selected element's ID, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    /// Find the element at the given screen coordinates.
    ///
    /// Returns the topmost hit: insertion order is the z-order, so the
    /// scan runs back to front.
    #[must_use]
    pub fn element_at(&self, screen_x: f32, screen_y: f32) -> Option<ElementId> {
        let (x, y) = self.viewport.to_canvas(screen_x, screen_y);
        self.elements
            .iter()
            .rev()
            .find(|e| e.contains_point(x, y))
            .map(|e| e.id)
    }

    /// Handle a tap on the canvas: select the hit element, or clear the
    /// selection on a background tap.
    pub fn tap(&mut self, screen_x: f32, screen_y: f32) {
        match self.element_at(screen_x, screen_y) {
            Some(id) => self.apply_selection(id),
            None => self.deselect_all(),
        }
    }

    /// Rotate an element a quarter turn clockwise. Rotation stays
    /// normalized to [0, 2pi).
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not found.
    pub fn rotate_quarter_turn(&mut self, id: ElementId) -> PlanResult<()> {
        let element = self
            .get_element_mut(id)
            .ok_or_else(|| PlanError::ElementNotFound(id.to_string()))?;
        element.rotation = (element.rotation + FRAC_PI_2).rem_euclid(TAU);
        Ok(())
    }

    /// Serialize the plan to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> PlanResult<String> {
        serde_json::to_string(self).map_err(PlanError::Serialization)
    }

    /// Deserialize a plan from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> PlanResult<Self> {
        serde_json::from_str(json).map_err(PlanError::Serialization)
    }
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self::new(Room::default(), 800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> FloorPlan {
        FloorPlan::default()
    }

    fn chair(x: f32, y: f32) -> PlacedElement {
        PlacedElement::new("Chair", "chair.png", 60.0, 60.0).at(x, y)
    }

    #[test]
    fn test_add_remove() {
        let mut plan = plan();
        assert!(plan.is_empty());

        let id = plan.add_element(chair(10.0, 10.0));
        assert_eq!(plan.element_count(), 1);
        assert!(plan.get_element(id).is_some());

        plan.remove_element(id).expect("should remove");
        assert!(plan.is_empty());
        assert!(matches!(
            plan.remove_element(id),
            Err(PlanError::ElementNotFound(_))
        ));
    }

    #[test]
    fn test_remove_preserves_survivor_order() {
        let mut plan = plan();
        let a = plan.add_element(chair(0.0, 0.0));
        let b = plan.add_element(chair(100.0, 0.0));
        let c = plan.add_element(chair(200.0, 0.0));

        plan.remove_element(b).expect("should remove");

        let remaining: Vec<_> = plan.elements().map(|e| e.id).collect();
        assert_eq!(remaining, vec![a, c]);
    }

    #[test]
    fn test_single_selection_last_tap_wins() {
        let mut plan = plan();
        let a = plan.add_element(chair(0.0, 0.0));
        let b = plan.add_element(chair(100.0, 0.0));

        plan.select(a).expect("select a");
        plan.select(b).expect("select b");

        assert_eq!(plan.selected_id(), Some(b));
        let selected: Vec<_> = plan.elements().filter(|e| e.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, b);
    }

    #[test]
    fn test_delete_clears_selection() {
        let mut plan = plan();
        let id = plan.add_element(chair(0.0, 0.0));
        plan.select(id).expect("select");
        plan.remove_element(id).expect("remove");
        assert_eq!(plan.selected_id(), None);
    }

    #[test]
    fn test_background_tap_deselects() {
        let mut plan = plan();
        let id = plan.add_element(chair(10.0, 10.0));

        plan.tap(40.0, 40.0);
        assert_eq!(plan.selected_id(), Some(id));

        plan.tap(700.0, 500.0);
        assert_eq!(plan.selected_id(), None);
    }

    #[test]
    fn test_tap_switches_selection() {
        let mut plan = plan();
        let a = plan.add_element(chair(0.0, 0.0));
        let b = plan.add_element(chair(200.0, 0.0));

        plan.tap(30.0, 30.0);
        assert_eq!(plan.selected_id(), Some(a));

        plan.tap(230.0, 30.0);
        assert_eq!(plan.selected_id(), Some(b));
        let selected: Vec<_> = plan.elements().filter(|e| e.selected).map(|e| e.id).collect();
        assert_eq!(selected, vec![b]);
    }

    #[test]
    fn test_topmost_element_wins_hit_test() {
        let mut plan = plan();
        let _below = plan.add_element(chair(10.0, 10.0));
        let above = plan.add_element(chair(30.0, 30.0));

        // (40, 40) lies inside both; the later addition paints on top.
        assert_eq!(plan.element_at(40.0, 40.0), Some(above));
    }

    #[test]
    fn test_rotation_quantized() {
        let mut plan = plan();
        let id = plan.add_element(chair(0.0, 0.0));

        for n in 1u32..=8 {
            plan.rotate_quarter_turn(id).expect("rotate");
            let rotation = plan.get_element(id).expect("exists").rotation;
            #[allow(clippy::cast_precision_loss)]
            let expected = (n as f32 * FRAC_PI_2).rem_euclid(TAU);
            assert!(
                (rotation - expected).abs() < 1e-5,
                "after {n} taps: {rotation} != {expected}"
            );
        }
    }

    #[test]
    fn test_json_round_trip() {
        let mut plan = plan();
        let id = plan.add_element(chair(25.0, 35.0));
        plan.select(id).expect("select");

        let json = plan.to_json().expect("serialize");
        let restored = FloorPlan::from_json(&json).expect("deserialize");

        assert_eq!(restored.element_count(), 1);
        assert_eq!(restored.selected_id(), Some(id));
        let element = restored.get_element(id).expect("exists");
        assert_eq!(element.x, 25.0);
        assert_eq!(element.y, 35.0);
    }
}
