//! Snapshot export - the rasterized hand-off to print/share.
//!
//! Renders the plan's visual subtree (room, border, grid, elements) to
//! SVG, rasterizes it with the resvg/tiny-skia pipeline, and can wrap
//! the result in a single-page PDF for the platform print dialog. This
//! is a one-shot operation: callers log a failure and move on, nothing
//! here retries.

use floorplan_core::FloorPlan;

use crate::error::{RenderError, RenderResult};
use crate::svg::render_plan;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// PNG image.
    Png,
    /// SVG vector graphics (the SVG XML string as UTF-8 bytes).
    Svg,
    /// Single-page PDF, the print hand-off format.
    Pdf,
}

/// Configuration for plan export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Scale factor (e.g. 2.0 for retina output).
    pub scale: f32,
    /// Background color as RGBA bytes.
    pub background: [u8; 4],
    /// DPI for print export (default: 96.0).
    pub dpi: f32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: [255, 255, 255, 255],
            dpi: 96.0,
        }
    }
}

/// Exports a [`FloorPlan`] snapshot to SVG, PNG, or PDF.
pub struct PlanExporter {
    config: ExportConfig,
}

impl PlanExporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// Export a plan to the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan cannot be rendered or encoded.
    pub fn export(&self, plan: &FloorPlan, format: ExportFormat) -> RenderResult<Vec<u8>> {
        let bytes = match format {
            ExportFormat::Png => self.render_to_png(plan)?,
            ExportFormat::Svg => self.render_to_svg(plan).into_bytes(),
            ExportFormat::Pdf => self.render_to_pdf(plan)?,
        };
        tracing::debug!(
            ?format,
            elements = plan.element_count(),
            size = bytes.len(),
            "snapshot exported"
        );
        Ok(bytes)
    }

    /// Render the plan to an SVG document string.
    #[must_use]
    pub fn render_to_svg(&self, plan: &FloorPlan) -> String {
        render_plan(plan, self.config.background)
    }

    /// Render the plan to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization or encoding fails.
    pub fn render_to_png(&self, plan: &FloorPlan) -> RenderResult<Vec<u8>> {
        let svg_string = self.render_to_svg(plan);
        let pixmap = self.rasterize_svg(&svg_string)?;

        pixmap
            .encode_png()
            .map_err(|e| RenderError::Export(format!("PNG encoding failed: {e}")))
    }

    /// Render the plan to a single-page PDF.
    ///
    /// The page is sized from the pixel dimensions at the configured
    /// DPI, with the rasterized snapshot embedded full-bleed.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or PDF generation fails.
    #[allow(clippy::cast_precision_loss)]
    pub fn render_to_pdf(&self, plan: &FloorPlan) -> RenderResult<Vec<u8>> {
        let png_data = self.render_to_png(plan)?;
        let (out_w, out_h) = self.output_dimensions(plan);

        // Pixels to mm: pixels / dpi * 25.4
        let page_width_mm = out_w as f32 / self.config.dpi * 25.4;
        let page_height_mm = out_h as f32 / self.config.dpi * 25.4;

        let (doc, page1, layer1) = printpdf::PdfDocument::new(
            "Floor Plan",
            printpdf::Mm(page_width_mm),
            printpdf::Mm(page_height_mm),
            "Layer 1",
        );

        let current_layer = doc.get_page(page1).get_layer(layer1);

        let dynamic_image = printpdf::image_crate::load_from_memory(&png_data)
            .map_err(|e| RenderError::Export(format!("Failed to decode PNG for PDF: {e}")))?;

        let pdf_image = printpdf::Image::from_dynamic_image(&dynamic_image);

        let scale_x = page_width_mm / out_w as f32;
        let scale_y = page_height_mm / out_h as f32;

        let transform = printpdf::ImageTransform {
            translate_x: Some(printpdf::Mm(0.0)),
            translate_y: Some(printpdf::Mm(0.0)),
            scale_x: Some(scale_x),
            scale_y: Some(scale_y),
            ..Default::default()
        };

        pdf_image.add_to_layer(current_layer, transform);

        doc.save_to_bytes()
            .map_err(|e| RenderError::Export(format!("PDF save failed: {e}")))
    }

    /// Output dimensions (width, height) in pixels after scaling.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn output_dimensions(&self, plan: &FloorPlan) -> (u32, u32) {
        let (content_w, content_h) = floorplan_core::Viewport::content_size(&plan.room);
        let out_w = (content_w * self.config.scale) as u32;
        let out_h = (content_h * self.config.scale) as u32;
        (out_w.max(1), out_h.max(1))
    }

    /// Rasterize an SVG string to a tiny-skia Pixmap at the configured
    /// scale.
    fn rasterize_svg(&self, svg_string: &str) -> RenderResult<tiny_skia::Pixmap> {
        let opt = usvg::Options::default();
        let tree = usvg::Tree::from_str(svg_string, &opt)
            .map_err(|e| RenderError::Export(format!("SVG parsing failed: {e}")))?;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (px_w, px_h) = (
            (tree.size().width() * self.config.scale) as u32,
            (tree.size().height() * self.config.scale) as u32,
        );

        let mut pixmap = tiny_skia::Pixmap::new(px_w.max(1), px_h.max(1))
            .ok_or_else(|| RenderError::Export("Failed to create pixmap".to_string()))?;

        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(self.config.scale, self.config.scale),
            &mut pixmap.as_mut(),
        );

        Ok(pixmap)
    }
}
