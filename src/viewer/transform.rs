// Pan/zoom transform for the full-screen photo viewer
// - Double-tap toggles between fit (1x) and a fixed magnification anchored at the tap
// - Pinch/drag keeps the content under the gesture centroid stationary
// - Offsets are always clamped so the zoomed image never reveals empty space

use crate::models::{Vector2, ViewportSize};

/// Zoom scale of an un-zoomed photo; the transform never goes below it.
pub const MIN_ZOOM: f32 = 1.0;
/// Magnification applied by a double-tap from the resting state.
pub const DOUBLE_TAP_ZOOM: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomMode {
    Resting,
    Zoomed,
}

/// Pan offset and zoom of one open viewer.
///
/// `offset` is expressed in content coordinates: the rendered image is scaled by
/// `zoom` around the top-left corner and translated by `-offset * zoom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPanState {
    pub offset: Vector2,
    pub zoom: f32,
}

impl Default for ZoomPanState {
    fn default() -> Self {
        Self {
            offset: Vector2::ZERO,
            zoom: MIN_ZOOM,
        }
    }
}

/// 2D affine transform handed to the renderer: scale, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerTransform {
    pub translation: Vector2,
    pub scale: f32,
}

impl LayerTransform {
    /// Map a point in content coordinates to screen coordinates.
    pub fn apply(&self, point: Vector2) -> Vector2 {
        point * self.scale + self.translation
    }
}

impl ZoomPanState {
    pub fn mode(&self) -> ZoomMode {
        if self.zoom > MIN_ZOOM {
            ZoomMode::Zoomed
        } else {
            ZoomMode::Resting
        }
    }

    /// Toggle between resting and `DOUBLE_TAP_ZOOM`.
    ///
    /// Zooming in anchors the view at `tap_point`; zooming out returns to the origin.
    pub fn on_double_tap(&self, viewport: ViewportSize, tap_point: Vector2) -> Self {
        let (zoom, target) = match self.mode() {
            ZoomMode::Zoomed => (MIN_ZOOM, self.offset),
            ZoomMode::Resting => (DOUBLE_TAP_ZOOM, tap_point),
        };
        Self {
            offset: clamp_offset(target, viewport, zoom),
            zoom,
        }
    }

    /// Apply one pinch/drag step.
    ///
    /// `pan` is applied in pre-zoom coordinates and the content point under
    /// `centroid` stays put while the scale changes.
    pub fn on_transform_gesture(
        &self,
        viewport: ViewportSize,
        pan: Vector2,
        centroid: Vector2,
        gesture_zoom: f32,
    ) -> Self {
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * gesture_zoom).max(MIN_ZOOM);
        let offset =
            self.offset + (pan + centroid / old_zoom) - (centroid / new_zoom + pan / old_zoom);

        Self {
            offset: clamp_offset(offset, viewport, new_zoom),
            zoom: new_zoom,
        }
    }

    /// Re-clamp after the viewport changed size.
    pub fn fit_viewport(&self, viewport: ViewportSize) -> Self {
        Self {
            offset: clamp_offset(self.offset, viewport, self.zoom),
            zoom: self.zoom,
        }
    }

    pub fn layer_transform(&self) -> LayerTransform {
        LayerTransform {
            translation: -self.offset * self.zoom,
            scale: self.zoom,
        }
    }
}

/// Clamp each axis of `offset` to `[0, (extent / zoom) * (zoom - 1)]`.
///
/// At `zoom == 1` the range collapses to the origin. Callers keep `zoom >= 1`.
pub fn clamp_offset(offset: Vector2, viewport: ViewportSize, zoom: f32) -> Vector2 {
    Vector2::new(
        clamp_axis(offset.x, viewport.width, zoom),
        clamp_axis(offset.y, viewport.height, zoom),
    )
}

fn clamp_axis(value: f32, extent: f32, zoom: f32) -> f32 {
    let upper = ((extent / zoom) * (zoom - 1.0)).max(0.0);
    // max/min instead of f32::clamp: a NaN bound must not panic mid-gesture.
    value.max(0.0).min(upper)
}
