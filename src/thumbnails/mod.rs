//! Thumbnail sizing for the photo grid.
//!
//! This module provides:
//! - `compute_sample_factor` - power-of-two decode subsampling for a size cap
//! - `ThumbnailPlan` - scaled decode or title placeholder per grid card
//! - `read_dimensions` / `plan_for_file` - header probe feeding the scaler

pub mod probe;
pub mod scaler;

pub use probe::{plan_for_file, read_dimensions};
pub use scaler::{compute_sample_factor, ScaleDecision, ThumbnailPlan};
