//! Bounds-only image probe.
//!
//! Reads just enough of the file header to learn its dimensions, the input the
//! scaler needs before a decode is requested.

use std::path::Path;

use anyhow::{Context, Result};
use image::ImageReader;
use tracing::debug;

use super::scaler::ThumbnailPlan;

pub fn read_dimensions(path: &Path) -> Result<(u32, u32)> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("Failed to open image: {:?}", path))?
        .with_guessed_format()
        .context("Failed to guess image format")?;
    reader
        .into_dimensions()
        .with_context(|| format!("Failed to read dimensions: {:?}", path))
}

/// Probe `path` and plan its thumbnail, falling back to the title on any failure.
pub fn plan_for_file(path: &Path, max_target_pixels: i32, title: &str) -> ThumbnailPlan {
    match read_dimensions(path) {
        Ok((width, height)) => {
            debug!(?path, width, height, "Probed image");
            // Dimensions beyond i32 are treated like any other unusable size.
            let width = i32::try_from(width).unwrap_or(-1);
            let height = i32::try_from(height).unwrap_or(-1);
            ThumbnailPlan::for_dimensions(width, height, max_target_pixels, title)
        }
        Err(e) => {
            debug!(?path, "Probe failed: {:#}", e);
            ThumbnailPlan::Placeholder(title.to_string())
        }
    }
}
