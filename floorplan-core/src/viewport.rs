//! The zoomable, pannable viewport hosting the room.

use serde::{Deserialize, Serialize};

use crate::room::Room;

/// Minimum pinch zoom.
pub const MIN_ZOOM: f32 = 0.5;
/// Maximum pinch zoom.
pub const MAX_ZOOM: f32 = 1.5;
/// Fixed margin around the room rectangle reserved for the decorative
/// border and the measurement overlay, in canvas pixels.
pub const BORDER_MARGIN: f32 = 40.0;

/// Pan/zoom state for the canvas viewport.
///
/// `pan_x`/`pan_y` are the screen-space offset of the canvas origin;
/// screen to canvas is `(screen - pan) / zoom`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    /// Visible width in screen pixels.
    pub view_width: f32,
    /// Visible height in screen pixels.
    pub view_height: f32,
    /// Current zoom level (1.0 = 100%), clamped to [0.5, 1.5].
    pub zoom: f32,
    /// Pan offset X in screen pixels.
    pub pan_x: f32,
    /// Pan offset Y in screen pixels.
    pub pan_y: f32,
}

impl Viewport {
    /// Create a viewport with the given visible size, unzoomed and
    /// unpanned.
    #[must_use]
    pub fn new(view_width: f32, view_height: f32) -> Self {
        Self {
            view_width,
            view_height,
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    /// Canvas pixel size of the content for a given room: the room
    /// rectangle plus the border margin on every side.
    #[must_use]
    pub fn content_size(room: &Room) -> (f32, f32) {
        (
            room.width_px() + BORDER_MARGIN * 2.0,
            room.height_px() + BORDER_MARGIN * 2.0,
        )
    }

    /// Transform a screen point into canvas coordinates.
    #[must_use]
    pub fn to_canvas(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (
            (screen_x - self.pan_x) / self.zoom,
            (screen_y - self.pan_y) / self.zoom,
        )
    }

    /// Apply a pinch scale factor about a screen-space focal point.
    ///
    /// Zoom is clamped to [[`MIN_ZOOM`], [`MAX_ZOOM`]]; the focal point
    /// stays under the user's fingers, then the pan is re-bounded.
    pub fn pinch(&mut self, scale: f32, focal_x: f32, focal_y: f32, room: &Room) {
        let old_zoom = self.zoom;
        self.zoom = (self.zoom * scale).clamp(MIN_ZOOM, MAX_ZOOM);
        let ratio = self.zoom / old_zoom;
        self.pan_x = focal_x - (focal_x - self.pan_x) * ratio;
        self.pan_y = focal_y - (focal_y - self.pan_y) * ratio;
        self.bound_pan(room);
    }

    /// Pan by a screen-space delta, bounded so the content cannot be
    /// pushed fully out of view.
    pub fn pan_by(&mut self, dx: f32, dy: f32, room: &Room) {
        self.pan_x += dx;
        self.pan_y += dy;
        self.bound_pan(room);
    }

    /// Clamp the pan offsets so at least one edge of the content stays
    /// pinned to the viewport. When the zoomed content fits entirely it
    /// is held inside [0, view - content]; when it overflows, panning is
    /// limited to the overflow range.
    pub fn bound_pan(&mut self, room: &Room) {
        let (content_w, content_h) = Self::content_size(room);
        self.pan_x = bound_axis(self.pan_x, content_w * self.zoom, self.view_width);
        self.pan_y = bound_axis(self.pan_y, content_h * self.zoom, self.view_height);
    }
}

fn bound_axis(pan: f32, scaled_content: f32, view: f32) -> f32 {
    let slack = view - scaled_content;
    if slack >= 0.0 {
        pan.clamp(0.0, slack)
    } else {
        pan.clamp(slack, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::new(15.0, 10.0).expect("valid room")
    }

    #[test]
    fn test_zoom_clamped_to_bounds() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.pinch(10.0, 400.0, 300.0, &room());
        assert_eq!(vp.zoom, MAX_ZOOM);
        vp.pinch(0.01, 400.0, 300.0, &room());
        assert_eq!(vp.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_pan_bounded_when_content_fits() {
        let mut vp = Viewport::new(800.0, 600.0);
        // Content is 530x380 at zoom 1, fits inside 800x600.
        vp.pan_by(5000.0, -5000.0, &room());
        assert_eq!(vp.pan_x, 800.0 - 530.0);
        assert_eq!(vp.pan_y, 0.0);
    }

    #[test]
    fn test_pan_bounded_when_content_overflows() {
        let mut vp = Viewport::new(400.0, 200.0);
        vp.pan_by(-5000.0, -5000.0, &room());
        assert_eq!(vp.pan_x, 400.0 - 530.0);
        assert_eq!(vp.pan_y, 200.0 - 380.0);
        vp.pan_by(5000.0, 5000.0, &room());
        assert_eq!(vp.pan_x, 0.0);
        assert_eq!(vp.pan_y, 0.0);
    }

    #[test]
    fn test_to_canvas_inverts_pan_and_zoom() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.zoom = 1.5;
        vp.pan_x = 30.0;
        vp.pan_y = -15.0;
        let (cx, cy) = vp.to_canvas(180.0, 135.0);
        assert!((cx - 100.0).abs() < 1e-4);
        assert!((cy - 100.0).abs() < 1e-4);
    }
}
