//! Row ink-density profiling.
//!
//! Collapses a rasterized page into a one-dimensional signal: one
//! ink-density value per pixel row. A pixel contributes in proportion to
//! how opaque *and* dark it is, which approximates ink coverage on a
//! light page independently of anti-aliasing softness. Fully transparent
//! pixels contribute zero regardless of color.
//!
//! This is the first stage of the pipeline; both the normalizer and the
//! segmenter consume its output.

use image::RgbaImage;

use crate::types::{AnalysisError, DensityProfile, MarginSpec};

/// BT.601 luminance weight for the red channel.
const LUMA_RED: f64 = 0.299;
/// BT.601 luminance weight for the green channel.
const LUMA_GREEN: f64 = 0.587;
/// BT.601 luminance weight for the blue channel.
const LUMA_BLUE: f64 = 0.114;

/// Compute the per-row ink density of a page raster.
///
/// For every row outside the top/bottom margins, sums
/// `alpha * (255 - L)` over the columns outside the left/right margins,
/// where `L = 0.299*R + 0.587*G + 0.114*B`. Rows inside the top/bottom
/// margins hold exactly `0.0` and their columns are never visited.
///
/// The returned profile always has one entry per raster row. Pure
/// function of its two inputs; deterministic.
///
/// # Errors
///
/// Returns [`AnalysisError::MarginsExceedHeight`] or
/// [`AnalysisError::MarginsExceedWidth`] when the margins leave no
/// eligible rows or columns.
#[allow(clippy::cast_possible_truncation)]
pub fn compute_row_density(
    raster: &RgbaImage,
    margins: MarginSpec,
) -> Result<DensityProfile, AnalysisError> {
    let (width, height) = raster.dimensions();
    margins.validate(width, height)?;

    let mut rows = vec![0.0_f64; height as usize];
    for row in margins.top..(height - margins.bottom) {
        let mut sum = 0.0_f64;
        for col in margins.left..(width - margins.right) {
            let [r, g, b, a] = raster.get_pixel(col, row).0;
            let luma = f64::from(r).mul_add(
                LUMA_RED,
                f64::from(g).mul_add(LUMA_GREEN, f64::from(b) * LUMA_BLUE),
            );
            sum += f64::from(a) * (255.0 - luma);
        }
        rows[row as usize] = sum;
    }

    Ok(DensityProfile::new(rows))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid_raster(width: u32, height: u32, pixel: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(pixel))
    }

    #[test]
    fn profile_length_equals_raster_height() {
        let raster = solid_raster(13, 29, [128, 128, 128, 255]);
        let profile = compute_row_density(&raster, MarginSpec::default()).unwrap();
        assert_eq!(profile.len(), 29);
    }

    #[test]
    fn profile_length_equals_raster_height_with_margins() {
        let raster = solid_raster(40, 60, [0, 0, 0, 255]);
        let margins = MarginSpec {
            top: 5,
            right: 3,
            bottom: 7,
            left: 2,
        };
        let profile = compute_row_density(&raster, margins).unwrap();
        assert_eq!(profile.len(), 60);
    }

    #[test]
    fn white_page_has_zero_density() {
        // L = 255 for white, so alpha * (255 - L) = 0 everywhere.
        let raster = solid_raster(20, 10, [255, 255, 255, 255]);
        let profile = compute_row_density(&raster, MarginSpec::default()).unwrap();
        assert!(profile.values().iter().all(|&v| v.abs() < f64::EPSILON));
    }

    #[test]
    fn transparent_pixels_contribute_zero() {
        // Fully transparent black: alpha = 0 kills the contribution.
        let raster = solid_raster(20, 10, [0, 0, 0, 0]);
        let profile = compute_row_density(&raster, MarginSpec::default()).unwrap();
        assert!(profile.values().iter().all(|&v| v.abs() < f64::EPSILON));
    }

    #[test]
    fn opaque_black_page_with_vertical_margins() {
        // Opaque black: per pixel contribution is 255 * (255 - 0) = 65025.
        let width = 20;
        let raster = solid_raster(width, 40, [0, 0, 0, 255]);
        let margins = MarginSpec {
            top: 10,
            right: 0,
            bottom: 10,
            left: 0,
        };
        let profile = compute_row_density(&raster, margins).unwrap();

        let expected = 65025.0 * f64::from(width);
        for (row, &value) in profile.values().iter().enumerate() {
            if row < 10 || row >= 30 {
                assert!(
                    value.abs() < f64::EPSILON,
                    "margin row {row} should be 0, got {value}",
                );
            } else {
                assert!(
                    (value - expected).abs() < 1e-6,
                    "row {row} should be {expected}, got {value}",
                );
            }
        }
    }

    #[test]
    fn margin_rows_are_zero_regardless_of_content() {
        // Dark content everywhere; only the margins must read as 0.
        let raster = solid_raster(16, 30, [10, 10, 10, 255]);
        let margins = MarginSpec {
            top: 4,
            right: 0,
            bottom: 6,
            left: 0,
        };
        let profile = compute_row_density(&raster, margins).unwrap();
        for row in 0..4 {
            assert!(profile.values()[row].abs() < f64::EPSILON);
        }
        for row in 24..30 {
            assert!(profile.values()[row].abs() < f64::EPSILON);
        }
        assert!(profile.values()[10] > 0.0);
    }

    #[test]
    fn column_margins_shrink_row_sums() {
        let raster = solid_raster(20, 10, [0, 0, 0, 255]);
        let full = compute_row_density(&raster, MarginSpec::default()).unwrap();
        let trimmed = compute_row_density(
            &raster,
            MarginSpec {
                top: 0,
                right: 5,
                bottom: 0,
                left: 5,
            },
        )
        .unwrap();

        // 10 of 20 columns excluded: exactly half the ink remains.
        assert!((trimmed.values()[0] - full.values()[0] / 2.0).abs() < 1e-6);
    }

    #[test]
    fn darker_rows_score_higher() {
        // Top half mid-gray, bottom half near-black.
        let raster = RgbaImage::from_fn(10, 10, |_, y| {
            if y < 5 {
                Rgba([128, 128, 128, 255])
            } else {
                Rgba([10, 10, 10, 255])
            }
        });
        let profile = compute_row_density(&raster, MarginSpec::default()).unwrap();
        assert!(
            profile.values()[7] > profile.values()[2],
            "darker rows should have higher density, got {:?}",
            profile.values(),
        );
    }

    #[test]
    fn invalid_vertical_margins_fail_fast() {
        let raster = solid_raster(10, 10, [0, 0, 0, 255]);
        let result = compute_row_density(&raster, MarginSpec::uniform(5));
        assert!(matches!(
            result,
            Err(AnalysisError::MarginsExceedHeight { .. }),
        ));
    }

    #[test]
    fn invalid_horizontal_margins_fail_fast() {
        let raster = solid_raster(10, 100, [0, 0, 0, 255]);
        let margins = MarginSpec {
            top: 0,
            right: 6,
            bottom: 0,
            left: 4,
        };
        let result = compute_row_density(&raster, margins);
        assert!(matches!(
            result,
            Err(AnalysisError::MarginsExceedWidth { .. }),
        ));
    }
}
