//! Full-screen viewer state for an opened photo.
//!
//! `transform` holds the pan/zoom math; `ViewerState` ties it to the photo
//! being shown and the surface it is drawn on.

pub mod transform;

pub use transform::{clamp_offset, LayerTransform, ZoomMode, ZoomPanState};

use crate::models::{Vector2, ViewportSize};

/// One open viewer. Dropped when the viewer is dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    pub photo_id: i64,
    pub viewport: ViewportSize,
    pub transform: ZoomPanState,
}

impl ViewerState {
    pub fn open(photo_id: i64, viewport: ViewportSize) -> Self {
        Self {
            photo_id,
            viewport,
            transform: ZoomPanState::default(),
        }
    }

    pub fn double_tap(&mut self, tap_point: Vector2) {
        self.transform = self.transform.on_double_tap(self.viewport, tap_point);
    }

    pub fn transform_gesture(&mut self, pan: Vector2, centroid: Vector2, gesture_zoom: f32) {
        self.transform = self
            .transform
            .on_transform_gesture(self.viewport, pan, centroid, gesture_zoom);
    }

    pub fn resize(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
        self.transform = self.transform.fit_viewport(viewport);
    }
}
