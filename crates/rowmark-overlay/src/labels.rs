//! Band labels and anchor markers.
//!
//! A label is "page.band" text (both 1-based) positioned at a fixed
//! distance from the page's right edge, vertically at the band's anchor
//! row. Text rasterization is left to the consumer -- this keeps the
//! crate free of font dependencies -- but a tick marker is drawn per
//! anchor so overlay images show where each label lands.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;
use rowmark_analysis::Anchor;
use serde::{Deserialize, Serialize};

/// Horizontal length of an anchor tick marker, in pixels.
const MARKER_LENGTH: f32 = 12.0;

/// A positioned band label, ready for a text renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Label text, formatted "page.band" (e.g. "3.7").
    pub text: String,
    /// Right-aligned x position in page coordinates.
    pub x: f64,
    /// Vertical anchor row (the band's weighted centroid).
    pub y: f64,
}

/// Build one label per anchor for the given page.
///
/// Band numbering restarts at 1 on every page; `label_offset` is the
/// distance of the label column from the page's right edge.
#[must_use]
pub fn band_labels(
    page_number: usize,
    anchors: &[Anchor],
    page_width: u32,
    label_offset: u32,
) -> Vec<Label> {
    let x = f64::from(page_width.saturating_sub(label_offset));
    anchors
        .iter()
        .enumerate()
        .map(|(index, anchor)| Label {
            text: format!("{page_number}.{}", index + 1),
            x,
            y: anchor.row,
        })
        .collect()
}

/// Draw a horizontal tick ending at `marker_x` for every anchor.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn draw_anchor_markers(
    page: &mut RgbaImage,
    anchors: &[Anchor],
    marker_x: u32,
    color: Rgba<u8>,
) {
    let x = marker_x as f32;
    for anchor in anchors {
        let y = anchor.row as f32;
        draw_line_segment_mut(page, (x - MARKER_LENGTH, y), (x, y), color);
    }
}
