//! # Floorplan Core
//!
//! Headless logic for the 2D floor-plan composer: the feet-to-pixel
//! placement grid, the room model, placed furniture elements with
//! independent pan/resize/rotate gesture state machines, single
//! selection, and randomized palette placement.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               floorplan-core                │
//! ├─────────────────────────────────────────────┤
//! │  Plan             │  Gestures               │
//! │  - Room (ft)      │  - Drag (snapshot+Δ)    │
//! │  - Elements       │  - Resize per axis      │
//! │  - Selection      │  - Quarter-turn rotate  │
//! ├─────────────────────────────────────────────┤
//! │  Viewport         │  Palette                │
//! │  - Zoom [0.5,1.5] │  - Catalog assets (ft)  │
//! │  - Bounded pan    │  - Random placement     │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod element;
pub mod error;
pub mod gesture;
pub mod placement;
pub mod plan;
pub mod room;
pub mod scale;
pub mod viewport;

pub use catalog::FurnitureAsset;
pub use element::{ElementId, PlacedElement, MIN_ELEMENT_SIZE};
pub use error::{PlanError, PlanResult};
pub use gesture::{
    DragGesture, GestureController, PinchGesture, ResizeAxis, ResizeGesture, ViewportPanGesture,
};
pub use placement::{spawn_element, spawn_position};
pub use plan::FloorPlan;
pub use room::Room;
pub use scale::{feet_to_px, format_feet, px_to_feet, GRID_STEP_FT, PIXELS_PER_FOOT};
pub use viewport::{Viewport, BORDER_MARGIN, MAX_ZOOM, MIN_ZOOM};

/// Floorplan core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
