//! Display normalization of density profiles.
//!
//! Rescales a raw profile so its maximum hits a configured peak value,
//! suitable for drawing a fixed-width trace in the overlay gutter. This
//! branch exists only for visualization: the segmenter's noise threshold
//! is calibrated against raw, unscaled sums and must never see the
//! normalized output.

use crate::types::DensityProfile;

/// Default peak value for the normalized trace, in pixels of trace width.
pub const DEFAULT_PEAK: f64 = 50.0;

/// Linearly rescale a profile so its maximum equals `peak`.
///
/// Returns a new profile; the input is never mutated. When the profile's
/// maximum is zero (a blank page, or an empty profile) there is nothing
/// to scale and a clone of the input is returned unchanged -- this is a
/// defined no-op branch, not an error.
#[must_use]
pub fn normalize(profile: &DensityProfile, peak: f64) -> DensityProfile {
    let max_value = profile.max_value();
    if max_value <= 0.0 {
        return profile.clone();
    }

    DensityProfile::new(
        profile
            .values()
            .iter()
            .map(|&v| v / max_value * peak)
            .collect(),
    )
}
