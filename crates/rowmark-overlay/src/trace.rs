//! Density trace rendering.
//!
//! Draws the display-normalized profile as one horizontal line per row,
//! extending rightward from a baseline in the gutter next to the page.
//! Row `r` of the trace sits at `y = r`, so the trace lines up exactly
//! with the page content it describes.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;
use rowmark_analysis::DensityProfile;

/// Draw a normalized density profile as a horizontal bar per row.
///
/// `baseline_x` is the left end of every bar; a row's bar extends right
/// by its normalized value (the normalizer's peak bounds the width).
/// Rows with non-positive values draw nothing. Rows beyond the canvas
/// height are clipped by the drawing primitive.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn draw_density_trace(
    canvas: &mut RgbaImage,
    normalized: &DensityProfile,
    baseline_x: u32,
    color: Rgba<u8>,
) {
    let base = baseline_x as f32;
    for (row, &value) in normalized.values().iter().enumerate() {
        if value <= 0.0 {
            continue;
        }
        let y = row as f32;
        draw_line_segment_mut(canvas, (base, y), (base + value as f32, y), color);
    }
}
