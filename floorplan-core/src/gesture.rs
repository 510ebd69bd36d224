//! Gesture state machines for element and viewport manipulation.
//!
//! Each gesture is an explicit start/update/end machine: `begin`
//! snapshots the value it owns, every `update` recomputes that value
//! from the snapshot plus the cumulative translation reported by the
//! recognizer, and `end`/`cancel` simply drop the snapshot - an
//! interrupted gesture keeps its last applied value, there is no
//! rollback. Each machine writes only its own dimension(s), so a drag,
//! a right-edge resize, and a bottom-edge resize can run concurrently
//! from independent touch points without feeding back into each other.

use serde::{Deserialize, Serialize};

use crate::element::{ElementId, MIN_ELEMENT_SIZE};
use crate::error::{PlanError, PlanResult};
use crate::plan::FloorPlan;

/// Which element dimension a resize handle owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeAxis {
    /// The right-edge handle: horizontal translation edits width.
    Horizontal,
    /// The bottom-edge handle: vertical translation edits height.
    Vertical,
}

/// An in-flight drag of an element body.
#[derive(Debug, Clone, Copy)]
pub struct DragGesture {
    element: ElementId,
    origin_x: f32,
    origin_y: f32,
}

impl DragGesture {
    /// Start dragging an element, snapshotting its current position.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not in the plan.
    pub fn begin(plan: &FloorPlan, element: ElementId) -> PlanResult<Self> {
        let e = plan
            .get_element(element)
            .ok_or_else(|| PlanError::ElementNotFound(element.to_string()))?;
        Ok(Self {
            element,
            origin_x: e.x,
            origin_y: e.y,
        })
    }

    /// Apply the cumulative translation since the gesture started.
    ///
    /// Position is unconstrained - elements may be dragged outside the
    /// room.
    ///
    /// # Errors
    ///
    /// Returns an error if the element was deleted mid-gesture.
    pub fn update(&self, plan: &mut FloorPlan, translation_x: f32, translation_y: f32) -> PlanResult<()> {
        let e = plan
            .get_element_mut(self.element)
            .ok_or_else(|| PlanError::ElementNotFound(self.element.to_string()))?;
        e.x = self.origin_x + translation_x;
        e.y = self.origin_y + translation_y;
        Ok(())
    }
}

/// An in-flight edge-handle resize of a single dimension.
#[derive(Debug, Clone, Copy)]
pub struct ResizeGesture {
    element: ElementId,
    axis: ResizeAxis,
    origin: f32,
}

impl ResizeGesture {
    /// Start resizing along one axis, snapshotting that dimension.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not in the plan.
    pub fn begin(plan: &FloorPlan, element: ElementId, axis: ResizeAxis) -> PlanResult<Self> {
        let e = plan
            .get_element(element)
            .ok_or_else(|| PlanError::ElementNotFound(element.to_string()))?;
        let origin = match axis {
            ResizeAxis::Horizontal => e.width,
            ResizeAxis::Vertical => e.height,
        };
        Ok(Self {
            element,
            axis,
            origin,
        })
    }

    /// Apply the cumulative translation along this gesture's axis.
    /// The dimension never falls below [`MIN_ELEMENT_SIZE`], no matter
    /// how negative the translation gets.
    ///
    /// # Errors
    ///
    /// Returns an error if the element was deleted mid-gesture.
    pub fn update(&self, plan: &mut FloorPlan, translation: f32) -> PlanResult<()> {
        let e = plan
            .get_element_mut(self.element)
            .ok_or_else(|| PlanError::ElementNotFound(self.element.to_string()))?;
        let next = (self.origin + translation).max(MIN_ELEMENT_SIZE);
        match self.axis {
            ResizeAxis::Horizontal => e.width = next,
            ResizeAxis::Vertical => e.height = next,
        }
        Ok(())
    }
}

/// An in-flight two-finger pan of the whole viewport.
#[derive(Debug, Clone, Copy)]
pub struct ViewportPanGesture {
    origin_pan_x: f32,
    origin_pan_y: f32,
}

impl ViewportPanGesture {
    /// Start panning, snapshotting the current offsets.
    #[must_use]
    pub fn begin(plan: &FloorPlan) -> Self {
        Self {
            origin_pan_x: plan.viewport.pan_x,
            origin_pan_y: plan.viewport.pan_y,
        }
    }

    /// Apply the cumulative translation, re-bounded against the room.
    pub fn update(&self, plan: &mut FloorPlan, translation_x: f32, translation_y: f32) {
        plan.viewport.pan_x = self.origin_pan_x;
        plan.viewport.pan_y = self.origin_pan_y;
        let room = plan.room;
        plan.viewport.pan_by(translation_x, translation_y, &room);
    }
}

/// An in-flight pinch zoom about a fixed focal point.
#[derive(Debug, Clone, Copy)]
pub struct PinchGesture {
    origin_zoom: f32,
    origin_pan_x: f32,
    origin_pan_y: f32,
    focal_x: f32,
    focal_y: f32,
}

impl PinchGesture {
    /// Start a pinch about the given screen-space focal point.
    #[must_use]
    pub fn begin(plan: &FloorPlan, focal_x: f32, focal_y: f32) -> Self {
        Self {
            origin_zoom: plan.viewport.zoom,
            origin_pan_x: plan.viewport.pan_x,
            origin_pan_y: plan.viewport.pan_y,
            focal_x,
            focal_y,
        }
    }

    /// Apply the cumulative scale factor since the pinch started.
    pub fn update(&self, plan: &mut FloorPlan, scale: f32) {
        plan.viewport.zoom = self.origin_zoom;
        plan.viewport.pan_x = self.origin_pan_x;
        plan.viewport.pan_y = self.origin_pan_y;
        let room = plan.room;
        plan.viewport
            .pinch(scale, self.focal_x, self.focal_y, &room);
    }
}

/// One slot per gesture recognizer, mirroring how the touch layer
/// delivers events: at most one drag, one resize per axis, one viewport
/// pan, and one pinch can be in flight, and all of them independently.
///
/// The drag slot doubles as the "is dragging" flag the palette checks
/// before accepting taps.
#[derive(Debug, Default)]
pub struct GestureController {
    drag: Option<DragGesture>,
    resize_horizontal: Option<ResizeGesture>,
    resize_vertical: Option<ResizeGesture>,
    viewport_pan: Option<ViewportPanGesture>,
    pinch: Option<PinchGesture>,
}

impl GestureController {
    /// Create a controller with no gesture in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an element drag is currently in flight. Palette taps are
    /// gated on this so a drag that ends over the palette does not
    /// spawn an element.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin dragging an element.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not in the plan.
    pub fn begin_drag(&mut self, plan: &FloorPlan, element: ElementId) -> PlanResult<()> {
        self.drag = Some(DragGesture::begin(plan, element)?);
        Ok(())
    }

    /// Feed a drag update (cumulative translation since start).
    ///
    /// # Errors
    ///
    /// Returns an error if no drag is active or the element vanished.
    pub fn drag_update(&mut self, plan: &mut FloorPlan, tx: f32, ty: f32) -> PlanResult<()> {
        match &self.drag {
            Some(drag) => drag.update(plan, tx, ty),
            None => Err(PlanError::ElementNotFound("no active drag".into())),
        }
    }

    /// Finish (or cancel) the drag; the position stays where the last
    /// update put it.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Begin a resize along one axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not in the plan.
    pub fn begin_resize(
        &mut self,
        plan: &FloorPlan,
        element: ElementId,
        axis: ResizeAxis,
    ) -> PlanResult<()> {
        let gesture = ResizeGesture::begin(plan, element, axis)?;
        match axis {
            ResizeAxis::Horizontal => self.resize_horizontal = Some(gesture),
            ResizeAxis::Vertical => self.resize_vertical = Some(gesture),
        }
        Ok(())
    }

    /// Feed a resize update for one axis.
    ///
    /// # Errors
    ///
    /// Returns an error if no resize is active on that axis.
    pub fn resize_update(
        &mut self,
        plan: &mut FloorPlan,
        axis: ResizeAxis,
        translation: f32,
    ) -> PlanResult<()> {
        let slot = match axis {
            ResizeAxis::Horizontal => &self.resize_horizontal,
            ResizeAxis::Vertical => &self.resize_vertical,
        };
        match slot {
            Some(resize) => resize.update(plan, translation),
            None => Err(PlanError::ElementNotFound("no active resize".into())),
        }
    }

    /// Finish (or cancel) the resize on one axis.
    pub fn end_resize(&mut self, axis: ResizeAxis) {
        match axis {
            ResizeAxis::Horizontal => self.resize_horizontal = None,
            ResizeAxis::Vertical => self.resize_vertical = None,
        }
    }

    /// Begin panning the viewport.
    pub fn begin_viewport_pan(&mut self, plan: &FloorPlan) {
        self.viewport_pan = Some(ViewportPanGesture::begin(plan));
    }

    /// Feed a viewport pan update.
    pub fn viewport_pan_update(&mut self, plan: &mut FloorPlan, tx: f32, ty: f32) {
        if let Some(pan) = &self.viewport_pan {
            pan.update(plan, tx, ty);
        }
    }

    /// Finish the viewport pan.
    pub fn end_viewport_pan(&mut self) {
        self.viewport_pan = None;
    }

    /// Begin a pinch zoom about a focal point.
    pub fn begin_pinch(&mut self, plan: &FloorPlan, focal_x: f32, focal_y: f32) {
        self.pinch = Some(PinchGesture::begin(plan, focal_x, focal_y));
    }

    /// Feed a pinch update (cumulative scale since start).
    pub fn pinch_update(&mut self, plan: &mut FloorPlan, scale: f32) {
        if let Some(pinch) = &self.pinch {
            pinch.update(plan, scale);
        }
    }

    /// Finish the pinch.
    pub fn end_pinch(&mut self) {
        self.pinch = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::PlacedElement;
    use crate::viewport::{MAX_ZOOM, MIN_ZOOM};

    fn plan_with_bed() -> (FloorPlan, ElementId) {
        let mut plan = FloorPlan::default();
        let id = plan.add_element(PlacedElement::new("Bed", "bed.png", 180.0, 210.0).at(100.0, 50.0));
        (plan, id)
    }

    #[test]
    fn test_drag_applies_cumulative_translation() {
        let (mut plan, id) = plan_with_bed();
        let drag = DragGesture::begin(&plan, id).expect("begin");

        drag.update(&mut plan, 10.0, 5.0).expect("update");
        drag.update(&mut plan, 50.0, -20.0).expect("update");

        let e = plan.get_element(id).expect("exists");
        assert_eq!((e.x, e.y), (150.0, 30.0));
    }

    #[test]
    fn test_drag_allows_leaving_the_room() {
        let (mut plan, id) = plan_with_bed();
        let drag = DragGesture::begin(&plan, id).expect("begin");
        drag.update(&mut plan, -500.0, -500.0).expect("update");

        let e = plan.get_element(id).expect("exists");
        assert_eq!((e.x, e.y), (-400.0, -450.0));
    }

    #[test]
    fn test_resize_clamps_to_floor() {
        let (mut plan, id) = plan_with_bed();
        let resize =
            ResizeGesture::begin(&plan, id, ResizeAxis::Horizontal).expect("begin");

        resize.update(&mut plan, -1000.0).expect("update");
        assert_eq!(plan.get_element(id).expect("exists").width, MIN_ELEMENT_SIZE);

        // A later update in the same gesture can grow it again.
        resize.update(&mut plan, 40.0).expect("update");
        assert_eq!(plan.get_element(id).expect("exists").width, 220.0);
    }

    #[test]
    fn test_resize_axes_are_independent() {
        let (mut plan, id) = plan_with_bed();
        let right = ResizeGesture::begin(&plan, id, ResizeAxis::Horizontal).expect("begin");
        let bottom = ResizeGesture::begin(&plan, id, ResizeAxis::Vertical).expect("begin");

        right.update(&mut plan, 30.0).expect("update");
        bottom.update(&mut plan, -50.0).expect("update");

        let e = plan.get_element(id).expect("exists");
        assert_eq!(e.width, 210.0);
        assert_eq!(e.height, 160.0);
        // Neither resize moved the element.
        assert_eq!((e.x, e.y), (100.0, 50.0));
    }

    #[test]
    fn test_drag_and_resize_concurrently() {
        let (mut plan, id) = plan_with_bed();
        let mut gestures = GestureController::new();
        gestures.begin_drag(&plan, id).expect("drag");
        gestures
            .begin_resize(&plan, id, ResizeAxis::Horizontal)
            .expect("resize");

        assert!(gestures.is_dragging());
        gestures.drag_update(&mut plan, 20.0, 0.0).expect("drag update");
        gestures
            .resize_update(&mut plan, ResizeAxis::Horizontal, 15.0)
            .expect("resize update");

        let e = plan.get_element(id).expect("exists");
        assert_eq!(e.x, 120.0);
        assert_eq!(e.width, 195.0);

        gestures.end_drag();
        gestures.end_resize(ResizeAxis::Horizontal);
        assert!(!gestures.is_dragging());
    }

    #[test]
    fn test_interrupted_gesture_keeps_last_value() {
        let (mut plan, id) = plan_with_bed();
        let mut gestures = GestureController::new();
        gestures.begin_drag(&plan, id).expect("drag");
        gestures.drag_update(&mut plan, 33.0, 44.0).expect("update");

        // App backgrounded: the recognizer cancels. No rollback.
        gestures.end_drag();
        let e = plan.get_element(id).expect("exists");
        assert_eq!((e.x, e.y), (133.0, 94.0));
    }

    #[test]
    fn test_drag_update_fails_after_delete() {
        let (mut plan, id) = plan_with_bed();
        let drag = DragGesture::begin(&plan, id).expect("begin");
        plan.remove_element(id).expect("remove");
        assert!(drag.update(&mut plan, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_pinch_clamps_zoom() {
        let (mut plan, _) = plan_with_bed();
        let mut gestures = GestureController::new();

        gestures.begin_pinch(&plan, 400.0, 300.0);
        gestures.pinch_update(&mut plan, 4.0);
        assert_eq!(plan.viewport.zoom, MAX_ZOOM);

        gestures.pinch_update(&mut plan, 0.1);
        assert_eq!(plan.viewport.zoom, MIN_ZOOM);
        gestures.end_pinch();
    }

    #[test]
    fn test_viewport_pan_is_bounded() {
        let (mut plan, _) = plan_with_bed();
        let mut gestures = GestureController::new();
        gestures.begin_viewport_pan(&plan);
        gestures.viewport_pan_update(&mut plan, -10_000.0, 10_000.0);

        // 530x380 content inside an 800x600 view: pan stays in-bounds.
        assert_eq!(plan.viewport.pan_x, 0.0);
        assert_eq!(plan.viewport.pan_y, 600.0 - 380.0);
        gestures.end_viewport_pan();
    }
}
