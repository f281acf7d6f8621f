//! Decode-time downscaling for grid thumbnails.
//!
//! Picks a power-of-two subsampling factor so the decoded bitmap's longer edge
//! stays within the thumbnail cap. The decode itself belongs to the image codec.

use tracing::{trace, warn};

use crate::error::{GalleryError, Result};

/// Subsampling chosen for one decode request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleDecision {
    /// Power of two, at least 1.
    pub sample_factor: u32,
}

impl ScaleDecision {
    /// Size of the bitmap a subsampling decoder produces for this factor.
    pub fn decoded_size(&self, width: u32, height: u32) -> (u32, u32) {
        (
            width.div_ceil(self.sample_factor),
            height.div_ceil(self.sample_factor),
        )
    }
}

/// Smallest power of two `s` with `max(width, height) / s <= max_target_pixels`.
///
/// The comparison is exact, so the decoded longer edge never exceeds the target.
pub fn compute_sample_factor(width: i32, height: i32, max_target_pixels: i32) -> Result<u32> {
    if width <= 0 || height <= 0 {
        return Err(GalleryError::InvalidDimensions { width, height });
    }
    if max_target_pixels <= 0 {
        return Err(GalleryError::InvalidTarget(max_target_pixels));
    }

    let longer = width.max(height) as u64;
    let target = max_target_pixels as u64;
    let mut sample = 1u64;
    while longer > target * sample {
        sample *= 2;
    }

    trace!(width, height, max_target_pixels, sample, "Computed sample factor");
    Ok(sample as u32)
}

/// How a grid card should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailPlan {
    Scaled(ScaleDecision),
    /// Dimensions were unusable; draw the title text instead.
    Placeholder(String),
}

impl ThumbnailPlan {
    pub fn for_dimensions(width: i32, height: i32, max_target_pixels: i32, title: &str) -> Self {
        match compute_sample_factor(width, height, max_target_pixels) {
            Ok(sample_factor) => Self::Scaled(ScaleDecision { sample_factor }),
            Err(e) => {
                warn!(title, "Falling back to placeholder: {}", e);
                Self::Placeholder(title.to_string())
            }
        }
    }

    pub fn decision(&self) -> Option<ScaleDecision> {
        match self {
            Self::Scaled(decision) => Some(*decision),
            Self::Placeholder(_) => None,
        }
    }
}
