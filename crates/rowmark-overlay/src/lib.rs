//! rowmark-overlay: composite analysis results onto page rasters.
//!
//! The analysis core knows nothing about drawing; this crate turns a
//! [`PageAnalysis`] into a marked-up image: the page with its excluded
//! margins shaded and a tick per band anchor, plus a right-hand gutter
//! carrying the density trace. All drawing is deterministic pixel work
//! on in-memory buffers; callers own file I/O.

pub mod labels;
pub mod margins;
pub mod trace;

use image::{Rgba, RgbaImage, imageops};
use rowmark_analysis::{MarginSpec, PageAnalysis};
use serde::{Deserialize, Serialize};

pub use labels::{Label, band_labels, draw_anchor_markers};
pub use margins::{draw_label_guide, shade_margins};
pub use trace::draw_density_trace;

/// Appearance settings for overlay rendering.
///
/// Defaults match the rowmark UI conventions: a 100 px gutter with the
/// trace baseline at its midpoint (so a default-peak trace of 50 fits
/// exactly), labels 35 px in from the right edge, a light gray trace,
/// a translucent red margin shade, and strong red markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Width of the trace gutter appended to the page's right side.
    pub gutter_width: u32,

    /// Distance of the label column from the page's right edge.
    pub label_offset: u32,

    /// RGBA color of the density trace bars.
    pub trace_color: [u8; 4],

    /// RGBA shade blended over the excluded margin regions.
    pub margin_shade: [u8; 4],

    /// RGBA shade of the dashed guide marking the label column.
    pub guide_shade: [u8; 4],

    /// RGBA color of the anchor tick markers (and intended label text).
    pub label_color: [u8; 4],
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            gutter_width: 100,
            label_offset: 35,
            trace_color: [221, 221, 221, 255],
            margin_shade: [252, 110, 116, 102],
            guide_shade: [0, 0, 0, 128],
            label_color: [193, 18, 31, 255],
        }
    }
}

/// Render a full page overlay: page content, shaded margins, the dashed
/// label-column guide, anchor markers, and the density trace in an
/// appended gutter.
///
/// The output canvas is `page_width + gutter_width` wide and exactly as
/// tall as the page. The trace baseline sits at the gutter's midpoint,
/// bars extending rightward by the normalized density of each row.
#[must_use]
pub fn render_page_overlay(
    raster: &RgbaImage,
    analysis: &PageAnalysis,
    margins: MarginSpec,
    config: &OverlayConfig,
) -> RgbaImage {
    let (page_width, page_height) = raster.dimensions();

    let mut page = raster.clone();
    shade_margins(&mut page, margins, Rgba(config.margin_shade));
    draw_label_guide(
        &mut page,
        page_width.saturating_sub(config.label_offset),
        Rgba(config.guide_shade),
    );
    draw_anchor_markers(
        &mut page,
        &analysis.anchors,
        page_width.saturating_sub(config.label_offset),
        Rgba(config.label_color),
    );

    let mut canvas = RgbaImage::from_pixel(
        page_width + config.gutter_width,
        page_height,
        Rgba([255, 255, 255, 255]),
    );
    imageops::replace(&mut canvas, &page, 0, 0);
    draw_density_trace(
        &mut canvas,
        &analysis.normalized,
        page_width + config.gutter_width / 2,
        Rgba(config.trace_color),
    );
    canvas
}
