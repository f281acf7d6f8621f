// Gallery screen state: the grid's selection plus an optional full-screen viewer.
// Input events are routed to the selection or viewer reducers; the renderer
// reads the resulting state back out.

use tracing::{debug, info};

use crate::error::{GalleryError, Result};
use crate::models::{PhotoIdentity, PhotoLibrary, Vector2, ViewportSize};
use crate::selection::{SelectionState, TapAction};
use crate::viewer::ViewerState;

/// One user input delivered to the gallery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GalleryEvent {
    /// Tap on a grid item.
    Tap(i64),
    /// Long-press on a grid item.
    LongPress(i64),
    /// Double-tap inside the viewer.
    DoubleTap(Vector2),
    /// Pinch/drag step inside the viewer.
    Transform {
        pan: Vector2,
        centroid: Vector2,
        zoom: f32,
    },
    /// The zoomable surface was laid out at a new size.
    Resize(ViewportSize),
    /// Scrim tap, back action or Escape while the viewer is open.
    Dismiss,
    /// Cancel multi-select.
    ClearSelection,
}

pub struct GallerySession {
    library: PhotoLibrary,
    selection: SelectionState,
    viewport: ViewportSize,
    viewer: Option<ViewerState>,
}

impl GallerySession {
    pub fn new(library: PhotoLibrary, viewport: ViewportSize) -> Self {
        Self {
            library,
            selection: SelectionState::default(),
            viewport,
            viewer: None,
        }
    }

    pub fn library(&self) -> &PhotoLibrary {
        &self.library
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn viewer(&self) -> Option<&ViewerState> {
        self.viewer.as_ref()
    }

    /// Photo shown in the open viewer, if any.
    pub fn active_photo(&self) -> Option<&PhotoIdentity> {
        self.viewer
            .as_ref()
            .and_then(|v| self.library.get(v.photo_id))
    }

    pub fn handle(&mut self, event: GalleryEvent) -> Result<()> {
        match event {
            GalleryEvent::Tap(id) => self.on_grid_tap(id),
            GalleryEvent::LongPress(id) => self.on_grid_long_press(id),
            GalleryEvent::DoubleTap(point) => {
                if let Some(viewer) = self.viewer.as_mut() {
                    viewer.double_tap(point);
                    debug!(zoom = viewer.transform.zoom, offset = ?viewer.transform.offset, "[double-tap]");
                } else {
                    debug!("Double-tap without open viewer ignored");
                }
                Ok(())
            }
            GalleryEvent::Transform {
                pan,
                centroid,
                zoom,
            } => {
                if let Some(viewer) = self.viewer.as_mut() {
                    viewer.transform_gesture(pan, centroid, zoom);
                    debug!(zoom = viewer.transform.zoom, offset = ?viewer.transform.offset, "[transform]");
                } else {
                    debug!("Transform without open viewer ignored");
                }
                Ok(())
            }
            GalleryEvent::Resize(viewport) => {
                self.viewport = viewport;
                if let Some(viewer) = self.viewer.as_mut() {
                    viewer.resize(viewport);
                }
                Ok(())
            }
            GalleryEvent::Dismiss => {
                if let Some(viewer) = self.viewer.take() {
                    debug!(photo_id = viewer.photo_id, "Viewer dismissed");
                }
                Ok(())
            }
            GalleryEvent::ClearSelection => {
                self.selection = self.selection.clear();
                info!("[clear] selectedIds={:?}", self.selection.selected_ids());
                Ok(())
            }
        }
    }

    fn ensure_known(&self, id: i64) -> Result<()> {
        if self.library.contains(id) {
            Ok(())
        } else {
            Err(GalleryError::UnknownPhoto(id))
        }
    }

    fn on_grid_tap(&mut self, id: i64) -> Result<()> {
        if self.viewer.is_some() {
            debug!(id, "Grid tap under open viewer ignored");
            return Ok(());
        }
        self.ensure_known(id)?;

        let (selection, action) = self.selection.handle_tap(id);
        self.selection = selection;
        match action {
            TapAction::OpenViewer(photo_id) => {
                debug!(photo_id, "Opening viewer");
                self.viewer = Some(ViewerState::open(photo_id, self.viewport));
            }
            TapAction::ToggledSelection => {
                info!("[tap] selectedIds={:?}", self.selection.selected_ids());
            }
        }
        Ok(())
    }

    fn on_grid_long_press(&mut self, id: i64) -> Result<()> {
        if self.viewer.is_some() {
            debug!(id, "Grid long-press under open viewer ignored");
            return Ok(());
        }
        self.ensure_known(id)?;

        self.selection = self.selection.handle_long_press(id);
        info!("[long] selectedIds={:?}", self.selection.selected_ids());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::ZoomMode;
    use std::collections::BTreeSet;

    fn session() -> GallerySession {
        let photos = (1..=8)
            .map(|id| PhotoIdentity::new(id, format!("Photo {id}")))
            .collect();
        GallerySession::new(
            PhotoLibrary::new(photos).unwrap(),
            ViewportSize::new(1000.0, 800.0),
        )
    }

    #[test]
    fn test_tap_opens_and_dismiss_closes_viewer() {
        let mut session = session();
        session.handle(GalleryEvent::Tap(7)).unwrap();

        assert_eq!(session.active_photo().map(|p| p.id), Some(7));
        assert!(session.selection().selected_ids().is_empty());

        session.handle(GalleryEvent::Dismiss).unwrap();
        assert!(session.viewer().is_none());
    }

    #[test]
    fn test_tap_in_selection_mode_toggles() {
        let mut session = session();
        session.handle(GalleryEvent::LongPress(3)).unwrap();
        session.handle(GalleryEvent::Tap(7)).unwrap();

        assert!(session.viewer().is_none());
        assert_eq!(session.selection().selected_ids(), &BTreeSet::from([3, 7]));

        session.handle(GalleryEvent::ClearSelection).unwrap();
        assert!(!session.selection().is_selection_mode_active());
    }

    #[test]
    fn test_viewer_gestures() {
        let mut session = session();
        session.handle(GalleryEvent::Tap(2)).unwrap();
        session
            .handle(GalleryEvent::DoubleTap(Vector2::new(200.0, 100.0)))
            .unwrap();

        let transform = session.viewer().unwrap().transform;
        assert_eq!(transform.mode(), ZoomMode::Zoomed);
        assert_eq!(transform.offset, Vector2::new(200.0, 100.0));

        session
            .handle(GalleryEvent::Transform {
                pan: Vector2::ZERO,
                centroid: Vector2::new(500.0, 400.0),
                zoom: 0.25,
            })
            .unwrap();
        let transform = session.viewer().unwrap().transform;
        assert_eq!(transform.mode(), ZoomMode::Resting);
        assert_eq!(transform.offset, Vector2::ZERO);
    }

    #[test]
    fn test_reopening_viewer_starts_fresh() {
        let mut session = session();
        session.handle(GalleryEvent::Tap(2)).unwrap();
        session
            .handle(GalleryEvent::DoubleTap(Vector2::new(10.0, 10.0)))
            .unwrap();
        session.handle(GalleryEvent::Dismiss).unwrap();
        session.handle(GalleryEvent::Tap(2)).unwrap();

        assert_eq!(session.viewer().unwrap().transform.zoom, 1.0);
    }

    #[test]
    fn test_grid_input_ignored_while_viewer_open() {
        let mut session = session();
        session.handle(GalleryEvent::Tap(1)).unwrap();
        session.handle(GalleryEvent::LongPress(4)).unwrap();
        session.handle(GalleryEvent::Tap(5)).unwrap();

        assert_eq!(session.active_photo().map(|p| p.id), Some(1));
        assert!(session.selection().selected_ids().is_empty());
    }

    #[test]
    fn test_viewer_gestures_without_viewer_are_ignored() {
        let mut session = session();
        session
            .handle(GalleryEvent::DoubleTap(Vector2::new(1.0, 1.0)))
            .unwrap();
        session.handle(GalleryEvent::Dismiss).unwrap();
        assert!(session.viewer().is_none());
    }

    #[test]
    fn test_resize_updates_open_viewer() {
        let mut session = session();
        session.handle(GalleryEvent::Tap(1)).unwrap();
        session
            .handle(GalleryEvent::DoubleTap(Vector2::new(450.0, 350.0)))
            .unwrap();
        session
            .handle(GalleryEvent::Resize(ViewportSize::new(500.0, 400.0)))
            .unwrap();

        let viewer = session.viewer().unwrap();
        assert_eq!(viewer.viewport, ViewportSize::new(500.0, 400.0));
        assert_eq!(viewer.transform.offset, Vector2::new(250.0, 200.0));
    }

    #[test]
    fn test_unknown_photo_is_rejected() {
        let mut session = session();
        assert!(matches!(
            session.handle(GalleryEvent::Tap(99)),
            Err(GalleryError::UnknownPhoto(99))
        ));
        assert!(matches!(
            session.handle(GalleryEvent::LongPress(0)),
            Err(GalleryError::UnknownPhoto(0))
        ));
        assert!(session.viewer().is_none());
    }
}
