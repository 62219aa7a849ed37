//! Band segmentation and anchor placement.
//!
//! Scans a density profile left to right for maximal runs of strictly
//! positive rows, discards short runs as noise, and emits one
//! density-weighted centroid row per surviving band. This is where a
//! generated label like "3.7" gets its vertical position.
//!
//! The scan operates on *rounded* densities: rounding to integers is the
//! first operation, before any threshold comparison, so that faint
//! anti-aliasing residue (fractional sums just above zero) cannot open
//! or extend a band.

use crate::types::{Anchor, Band, DensityProfile, SegmenterConfig};

/// Default minimum band span. A band over rows `i..=j` survives only
/// when `j > i + DEFAULT_MIN_BAND_SPAN`, so runs of 11 rows or fewer are
/// dropped.
pub const DEFAULT_MIN_BAND_SPAN: usize = 10;

/// Segment a density profile into bands and compute one anchor per band.
///
/// Single O(n) pass:
///
/// 1. Round every density under `config.rounding`.
/// 2. Advance a cursor to the next strictly positive row, then extend
///    through consecutive positive rows to form a band.
/// 3. Keep the band only when it spans more than `config.min_band_span`
///    rows beyond its first row (strict comparison: an 11-row run is
///    discarded under the default span of 10, a 12-row run is kept).
/// 4. Emit the weighted centroid `sum(row * d[row]) / sum(d[row])` over
///    the band's rows.
///
/// Anchors are returned in ascending row order. An all-zero or empty
/// profile yields an empty result; short runs are discarded silently.
/// No state is retained between calls.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn segment(profile: &DensityProfile, config: &SegmenterConfig) -> Vec<Anchor> {
    let rounded: Vec<f64> = profile
        .values()
        .iter()
        .map(|&v| config.rounding.apply(v))
        .collect();
    let row_count = rounded.len();

    let mut anchors = Vec::new();
    let mut k = 0;
    while k < row_count {
        // Find the first positive row at or after the cursor.
        let mut i = k;
        while i < row_count && rounded[i] <= 0.0 {
            i += 1;
        }
        if i >= row_count {
            break;
        }

        // Extend through consecutive positive rows; ends at the last
        // profile index when the run reaches the bottom of the page.
        let mut j = i;
        while j + 1 < row_count && rounded[j + 1] > 0.0 {
            j += 1;
        }

        if j > i + config.min_band_span {
            let mut weighted_sum = 0.0;
            let mut mass = 0.0;
            for (row, &value) in rounded.iter().enumerate().take(j + 1).skip(i) {
                weighted_sum += row as f64 * value;
                mass += value;
            }

            // Every row in i..=j rounded strictly positive, so mass > 0
            // by construction. The guard keeps a malformed profile from
            // ever producing a NaN anchor.
            if mass > 0.0 {
                anchors.push(Anchor {
                    band: Band {
                        first_row: i,
                        last_row: j,
                    },
                    row: weighted_sum / mass,
                });
            }
        }

        k = j + 1;
    }

    anchors
}
