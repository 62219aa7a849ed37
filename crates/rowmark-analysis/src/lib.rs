//! rowmark-analysis: pure row-density page analysis (sans-IO).
//!
//! Turns a rasterized document page into label anchors through three
//! stateless stages:
//!
//! profile (per-row ink density) -> normalize (display trace) and
//! segment (bands with centroid anchors).
//!
//! The normalizer and segmenter are independent branches over the
//! profiler's output: the normalized profile exists only for the visual
//! trace and must never be fed to the segmenter, whose noise threshold
//! is calibrated against raw sums.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! rasters and returns structured data. Overlay compositing lives in
//! `rowmark-overlay`; file handling in the `rowmark` binary. Every
//! operation is a synchronous pure function, so analyses of separate
//! pages can run in parallel without shared state.

pub mod density;
pub mod normalize;
pub mod segment;
pub mod types;

pub use density::compute_row_density;
pub use normalize::{DEFAULT_PEAK, normalize};
pub use segment::{DEFAULT_MIN_BAND_SPAN, segment};
pub use types::{
    AnalysisConfig, AnalysisError, Anchor, Band, DensityProfile, MarginSpec, PageAnalysis,
    RgbaImage, RoundingRule, SegmenterConfig,
};

/// Run the full analysis pipeline on one page raster.
///
/// Produces a [`PageAnalysis`] bundling the raw profile, the
/// display-normalized profile, and the band anchors. Each call is
/// independent; nothing is cached between pages.
///
/// # Errors
///
/// Returns [`AnalysisError::MarginsExceedHeight`] or
/// [`AnalysisError::MarginsExceedWidth`] when `config.margins` leaves no
/// eligible rows or columns in the raster.
pub fn analyze(raster: &RgbaImage, config: &AnalysisConfig) -> Result<PageAnalysis, AnalysisError> {
    let profile = density::compute_row_density(raster, config.margins)?;
    let normalized = normalize::normalize(&profile, config.peak);
    let anchors = segment::segment(&profile, &config.segmenter);
    Ok(PageAnalysis {
        profile,
        normalized,
        anchors,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::Rgba;

    /// White page with an opaque black stripe covering `rows`.
    fn striped_page(
        width: u32,
        height: u32,
        rows: std::ops::Range<u32>,
    ) -> RgbaImage {
        RgbaImage::from_fn(width, height, |_, y| {
            if rows.contains(&y) {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        })
    }

    #[test]
    fn single_stripe_produces_one_centered_anchor() {
        let raster = striped_page(30, 120, 20..51);
        let analysis = analyze(&raster, &AnalysisConfig::default()).unwrap();

        assert_eq!(analysis.profile.len(), 120);
        assert_eq!(analysis.anchors.len(), 1);
        assert!(
            (analysis.anchors[0].row - 35.0).abs() < 1e-10,
            "uniform stripe should anchor at its midpoint, got {}",
            analysis.anchors[0].row,
        );
    }

    #[test]
    fn normalized_profile_peaks_at_configured_value() {
        let raster = striped_page(30, 120, 20..51);
        let config = AnalysisConfig {
            peak: 80.0,
            ..AnalysisConfig::default()
        };
        let analysis = analyze(&raster, &config).unwrap();
        assert!((analysis.normalized.max_value() - 80.0).abs() < 1e-10);
        // Normalization is a display branch only: the raw profile keeps
        // its unscaled sums.
        assert!(analysis.profile.max_value() > 80.0);
    }

    #[test]
    fn blank_page_yields_empty_anchors_and_unscaled_profile() {
        let raster = RgbaImage::from_pixel(20, 40, Rgba([255, 255, 255, 255]));
        let analysis = analyze(&raster, &AnalysisConfig::default()).unwrap();
        assert!(analysis.anchors.is_empty());
        assert_eq!(analysis.normalized, analysis.profile);
    }

    #[test]
    fn margins_suppress_bands_inside_them() {
        // Stripe entirely inside the top margin: nothing to anchor.
        let raster = striped_page(30, 120, 5..25);
        let config = AnalysisConfig {
            margins: MarginSpec {
                top: 30,
                right: 0,
                bottom: 0,
                left: 0,
            },
            ..AnalysisConfig::default()
        };
        let analysis = analyze(&raster, &config).unwrap();
        assert!(analysis.anchors.is_empty());
    }

    #[test]
    fn two_stripes_produce_two_anchors() {
        let raster = RgbaImage::from_fn(30, 120, |_, y| {
            if (10..31).contains(&y) || (60..81).contains(&y) {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        let analysis = analyze(&raster, &AnalysisConfig::default()).unwrap();
        assert_eq!(analysis.anchors.len(), 2);
        assert!((analysis.anchors[0].row - 20.0).abs() < 1e-10);
        assert!((analysis.anchors[1].row - 70.0).abs() < 1e-10);
    }

    #[test]
    fn invalid_margins_propagate() {
        let raster = striped_page(30, 40, 5..25);
        let config = AnalysisConfig {
            margins: MarginSpec::uniform(60),
            ..AnalysisConfig::default()
        };
        assert!(analyze(&raster, &config).is_err());
    }
}
