//! Plan-to-SVG rendering.
//!
//! Builds the complete visual subtree the export pipeline rasterizes:
//! background, brick border, room outline, 2 ft grid, measurement
//! overlay, and every placed element with its live dimension label.

use std::fmt::Write;

use floorplan_core::{FloorPlan, PlacedElement, BORDER_MARGIN};

use crate::border::border_tiles;
use crate::grid::{grid_lines, measurement_overlay};

/// Render a floor plan to an SVG document string.
///
/// The canvas spans the room plus the border margin on every side; all
/// room-local geometry is shifted by that margin.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn render_plan(plan: &FloorPlan, background: [u8; 4]) -> String {
    let room = &plan.room;
    let canvas_w = room.width_px() + BORDER_MARGIN * 2.0;
    let canvas_h = room.height_px() + BORDER_MARGIN * 2.0;
    let m = BORDER_MARGIN;

    let mut svg = String::with_capacity(8192);
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{canvas_w}\" height=\"{canvas_h}\" viewBox=\"0 0 {canvas_w} {canvas_h}\">",
    );

    // Background
    let bg_alpha = f32::from(background[3]) / 255.0;
    let _ = write!(
        svg,
        "<rect width=\"100%\" height=\"100%\" fill=\"rgba({},{},{},{bg_alpha})\"/>",
        background[0], background[1], background[2],
    );

    // Brick border
    for tile in border_tiles(room) {
        let _ = write!(
            svg,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#b5651d\" stroke=\"#8b4513\" stroke-width=\"1\"/>",
            tile.x + m,
            tile.y + m,
            tile.width,
            tile.height,
        );
    }

    // Room outline
    let _ = write!(
        svg,
        "<rect x=\"{m}\" y=\"{m}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"#333\" stroke-width=\"2\"/>",
        room.width_px(),
        room.height_px(),
    );

    // Grid lines every 2 ft
    for line in grid_lines(room) {
        let _ = write!(
            svg,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#ddd\" stroke-width=\"1\"/>",
            line.x1 + m,
            line.y1 + m,
            line.x2 + m,
            line.y2 + m,
        );
    }

    // Measurement overlay
    let overlay = measurement_overlay(room);
    for arrow in [&overlay.width_arrow, &overlay.height_arrow] {
        let (x1, y1) = (arrow.from.0 + m, arrow.from.1 + m);
        let (x2, y2) = (arrow.to.0 + m, arrow.to.1 + m);
        let _ = write!(
            svg,
            "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"#666\" stroke-width=\"1\"/>",
        );
        let (mid_x, mid_y) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
        let escaped = escape_xml(&arrow.label);
        let _ = write!(
            svg,
            "<text x=\"{mid_x}\" y=\"{}\" font-size=\"12\" fill=\"#666\" text-anchor=\"middle\" font-family=\"sans-serif\">{escaped}</text>",
            mid_y - 4.0,
        );
    }

    // Placed elements, in paint order
    for element in plan.elements() {
        render_element_svg(&mut svg, element, m);
    }

    svg.push_str("</svg>");
    svg
}

/// Render one placed element: the rotated glyph image, the selection
/// outline when selected, and the centered label above it.
fn render_element_svg(svg: &mut String, element: &PlacedElement, margin: f32) {
    let x = element.x + margin;
    let y = element.y + margin;
    let (cx, cy) = element.center();
    let (cx, cy) = (cx + margin, cy + margin);
    // Rotation is quarter-turn quantized; rounding strips float noise
    // from the accumulated radians.
    let degrees = element.rotation.to_degrees().round();
    let escaped_src = escape_xml(&element.src);

    let _ = write!(
        svg,
        "<g transform=\"rotate({degrees} {cx} {cy})\"><image x=\"{x}\" y=\"{y}\" width=\"{}\" height=\"{}\" href=\"{escaped_src}\"/>",
        element.width, element.height,
    );
    if element.selected {
        let _ = write!(
            svg,
            "<rect x=\"{x}\" y=\"{y}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"#1e88e5\" stroke-width=\"2\" stroke-dasharray=\"6 3\"/>",
            element.width, element.height,
        );
    }
    svg.push_str("</g>");

    // The label is not rotated with the glyph; it stays horizontally
    // centered above the element's bounding box.
    let (anchor_x, anchor_y) = element.label_anchor();
    let (anchor_x, anchor_y) = (anchor_x + margin, anchor_y + margin);
    let _ = write!(
        svg,
        "<text x=\"{anchor_x}\" y=\"{anchor_y}\" font-size=\"12\" fill=\"#333\" text-anchor=\"middle\" font-family=\"sans-serif\">",
    );
    for (i, line) in element.label().lines().enumerate() {
        let escaped = escape_xml(line);
        let dy = if i == 0 { 0.0 } else { 13.0 };
        let _ = write!(
            svg,
            "<tspan x=\"{anchor_x}\" dy=\"{dy}\">{escaped}</tspan>",
        );
    }
    svg.push_str("</text>");
}

/// Escape special XML characters.
pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
