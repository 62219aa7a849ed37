//! Margin shading and the label-column guide.
//!
//! The four margin rectangles (top and bottom across the full width,
//! left and right between them) are alpha-blended over the page so the
//! underlying content stays visible through the shade. A dashed vertical
//! guide marks the column where labels will be placed.

use image::{Pixel, Rgba, RgbaImage};
use rowmark_analysis::MarginSpec;

/// Dash pattern of the label-column guide: 5 px on, 5 px off.
const GUIDE_DASH: u32 = 5;

/// Blend a semi-transparent shade over the four margin regions of a page.
///
/// Margins larger than the page are clamped to the page bounds, so this
/// never panics on degenerate input; overlapping left/right margins on a
/// narrow page simply double-blend.
pub fn shade_margins(page: &mut RgbaImage, margins: MarginSpec, shade: Rgba<u8>) {
    let (width, height) = page.dimensions();

    let top = margins.top.min(height);
    let bottom = margins.bottom.min(height - top);
    let inner_height = height - top - bottom;

    // Top and bottom bands span the full width.
    blend_rect(page, 0, 0, width, top, shade);
    blend_rect(page, 0, height - bottom, width, bottom, shade);

    // Left and right bands fill the space between them.
    let left = margins.left.min(width);
    blend_rect(page, 0, top, left, inner_height, shade);
    let right = margins.right.min(width);
    blend_rect(page, width - right, top, right, inner_height, shade);
}

/// Blend a dashed vertical guide down the full page height at `guide_x`.
///
/// Marks the column where band labels will be placed. A `guide_x` at or
/// beyond the page width draws nothing.
pub fn draw_label_guide(page: &mut RgbaImage, guide_x: u32, shade: Rgba<u8>) {
    let (width, height) = page.dimensions();
    if guide_x >= width {
        return;
    }
    for y in 0..height {
        if (y / GUIDE_DASH) % 2 == 0 {
            page.get_pixel_mut(guide_x, y).blend(&shade);
        }
    }
}

/// Alpha-blend `shade` over every pixel of the given rectangle.
///
/// The caller guarantees the rectangle lies within the image bounds.
fn blend_rect(page: &mut RgbaImage, x0: u32, y0: u32, rect_width: u32, rect_height: u32, shade: Rgba<u8>) {
    for y in y0..y0 + rect_height {
        for x in x0..x0 + rect_width {
            page.get_pixel_mut(x, y).blend(&shade);
        }
    }
}
