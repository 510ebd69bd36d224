//! # Floorplan Render
//!
//! Pure rendering for the floor-plan composer: the decorative brick
//! border, the 2 ft grid and measurement overlay, the SVG view of a
//! plan, and the rasterized snapshot export (PNG, PDF for print).
//!
//! Everything in this crate is a function of a
//! [`floorplan_core::FloorPlan`]; no state lives here.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod border;
pub mod error;
pub mod export;
pub mod grid;
pub mod svg;

pub use border::{border_tiles, BorderTile, TILE_GAP, TILE_LENGTH, TILE_THICKNESS};
pub use error::{RenderError, RenderResult};
pub use export::{ExportConfig, ExportFormat, PlanExporter};
pub use grid::{grid_lines, measurement_overlay, DimensionArrow, GridLine, MeasurementOverlay};
pub use svg::render_plan;
