//! Shared types for the rowmark page analysis pipeline.

use serde::{Deserialize, Serialize};

use crate::normalize::DEFAULT_PEAK;
use crate::segment::DEFAULT_MIN_BAND_SPAN;

/// Re-export `RgbaImage` so downstream crates can reference page rasters
/// without depending on `image` directly.
pub use image::RgbaImage;

/// Pixel margins excluded from analysis.
///
/// Rows above `top` / below `bottom` never contribute to the density
/// profile at all; `left` and `right` exclude columns from each row's
/// summation. Supplied fresh per invocation -- there is no persisted
/// margin identity in the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarginSpec {
    /// Rows excluded at the top of the page.
    pub top: u32,
    /// Columns excluded at the right edge.
    pub right: u32,
    /// Rows excluded at the bottom of the page.
    pub bottom: u32,
    /// Columns excluded at the left edge.
    pub left: u32,
}

impl MarginSpec {
    /// Create a margin spec with the same value on all four sides.
    #[must_use]
    pub const fn uniform(pixels: u32) -> Self {
        Self {
            top: pixels,
            right: pixels,
            bottom: pixels,
            left: pixels,
        }
    }

    /// Check that the margins leave at least one eligible row and column
    /// in a `width` x `height` raster.
    ///
    /// A margin spec that consumes the whole page would otherwise produce
    /// a silently meaningless profile that is hard to diagnose downstream,
    /// so the profiler fails fast instead.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MarginsExceedHeight`] when
    /// `top + bottom >= height`, and [`AnalysisError::MarginsExceedWidth`]
    /// when `left + right >= width`.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), AnalysisError> {
        if u64::from(self.top) + u64::from(self.bottom) >= u64::from(height) {
            return Err(AnalysisError::MarginsExceedHeight {
                top: self.top,
                bottom: self.bottom,
                height,
            });
        }
        if u64::from(self.left) + u64::from(self.right) >= u64::from(width) {
            return Err(AnalysisError::MarginsExceedWidth {
                left: self.left,
                right: self.right,
                width,
            });
        }
        Ok(())
    }
}

/// One ink-density value per raster row.
///
/// Produced by [`crate::density::compute_row_density`]; the length always
/// equals the source raster's height. Rows inside the top/bottom margins
/// hold exactly `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityProfile(Vec<f64>);

impl DensityProfile {
    /// Create a profile from a vector of per-row densities.
    #[must_use]
    pub const fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Returns `true` if the profile has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a slice of all per-row densities.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the profile and returns the underlying vector.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.0
    }

    /// The maximum density, floored at zero.
    ///
    /// An empty profile reports `0.0`, which callers treat as the
    /// nothing-to-scale case.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.0.iter().fold(0.0_f64, |acc, &v| acc.max(v))
    }
}

/// A maximal contiguous run of rows with strictly positive rounded density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    /// Index of the first row in the band.
    pub first_row: usize,
    /// Index of the last row in the band (inclusive).
    pub last_row: usize,
}

impl Band {
    /// Number of rows in the band, inclusive of both endpoints.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.last_row - self.first_row + 1
    }
}

/// A label anchor: the density-weighted centroid row of one retained band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// The band this anchor was computed from.
    pub band: Band,
    /// Centroid row position, always within `[first_row, last_row]`.
    pub row: f64,
}

/// How the segmenter rounds densities to integers before thresholding.
///
/// Profile values are non-negative summations, so the two rules only
/// differ on exact `.5` fractions; exposing the rule keeps the choice
/// explicit and lets tests probe the boundary directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundingRule {
    /// `f64::round`: ties round away from zero (0.5 -> 1.0).
    #[default]
    HalfAwayFromZero,
    /// `f64::round_ties_even`: ties round to the nearest even integer.
    HalfToEven,
}

impl RoundingRule {
    /// Round a single value under this rule.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::HalfAwayFromZero => value.round(),
            Self::HalfToEven => value.round_ties_even(),
        }
    }
}

/// Configuration for the band segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// A band spanning rows `i..=j` is retained only when
    /// `j > i + min_band_span` (strict). With the default of 10, runs of
    /// 11 rows or fewer are discarded as noise.
    pub min_band_span: usize,

    /// Rounding rule applied to every density before thresholding.
    pub rounding: RoundingRule,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            min_band_span: DEFAULT_MIN_BAND_SPAN,
            rounding: RoundingRule::default(),
        }
    }
}

/// Configuration for a full per-page analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Margins excluded from profiling.
    pub margins: MarginSpec,

    /// Peak value for the display-normalized profile. Only affects the
    /// visual trace; the segmenter always consumes the raw profile.
    pub peak: f64,

    /// Band segmentation parameters.
    pub segmenter: SegmenterConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            margins: MarginSpec::default(),
            peak: DEFAULT_PEAK,
            segmenter: SegmenterConfig::default(),
        }
    }
}

/// Result of analyzing one page raster.
///
/// Bundles the outputs of all three stages so the overlay layer can draw
/// the trace and the markers from a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageAnalysis {
    /// Raw per-row ink densities (segmenter input).
    pub profile: DensityProfile,
    /// Display-scaled densities (overlay trace input only).
    pub normalized: DensityProfile,
    /// One anchor per retained band, in ascending row order.
    pub anchors: Vec<Anchor>,
}

/// Errors that can occur during page analysis.
///
/// The core is pure and numeric, so the taxonomy is deliberately small:
/// only margin preconditions can fail. Degenerate profiles (all zero,
/// no bands) are defined non-error outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Top and bottom margins leave no rows to analyze.
    #[error("margins leave no eligible rows: top {top} + bottom {bottom} must be less than raster height {height}")]
    MarginsExceedHeight {
        /// Requested top margin in pixels.
        top: u32,
        /// Requested bottom margin in pixels.
        bottom: u32,
        /// Raster height in pixels.
        height: u32,
    },

    /// Left and right margins leave no columns to analyze.
    #[error("margins leave no eligible columns: left {left} + right {right} must be less than raster width {width}")]
    MarginsExceedWidth {
        /// Requested left margin in pixels.
        left: u32,
        /// Requested right margin in pixels.
        right: u32,
        /// Raster width in pixels.
        width: u32,
    },
}
