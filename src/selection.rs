// Multi-select for the photo grid
// - Long-press toggles an item and is how selection mode is entered
// - While anything is selected, a tap toggles instead of opening the viewer
// - Selection mode is simply "the selected set is non-empty"

use std::collections::BTreeSet;

/// Set of selected photo ids. Each operation returns a new state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_ids: BTreeSet<i64>,
}

/// What a tap on a grid item resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    OpenViewer(i64),
    ToggledSelection,
}

/// Decoration drawn over a grid card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOverlay {
    /// Not in selection mode.
    Hidden,
    /// Selection mode, item not selected (hollow marker).
    Unselected,
    /// Selection mode, item selected (checkmark).
    Selected,
}

impl SelectionState {
    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            selected_ids: ids.into_iter().collect(),
        }
    }

    pub fn selected_ids(&self) -> &BTreeSet<i64> {
        &self.selected_ids
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected_ids.contains(&id)
    }

    pub fn is_selection_mode_active(&self) -> bool {
        !self.selected_ids.is_empty()
    }

    pub fn toggle(&self, id: i64) -> Self {
        let mut selected_ids = self.selected_ids.clone();
        if !selected_ids.remove(&id) {
            selected_ids.insert(id);
        }
        Self { selected_ids }
    }

    /// Route a tap: toggle while selecting, otherwise ask for the viewer.
    pub fn handle_tap(&self, id: i64) -> (Self, TapAction) {
        if self.is_selection_mode_active() {
            (self.toggle(id), TapAction::ToggledSelection)
        } else {
            (self.clone(), TapAction::OpenViewer(id))
        }
    }

    /// Long-press always toggles, regardless of mode.
    pub fn handle_long_press(&self, id: i64) -> Self {
        self.toggle(id)
    }

    pub fn clear(&self) -> Self {
        Self::default()
    }

    pub fn overlay_for(&self, id: i64) -> CardOverlay {
        if !self.is_selection_mode_active() {
            CardOverlay::Hidden
        } else if self.is_selected(id) {
            CardOverlay::Selected
        } else {
            CardOverlay::Unselected
        }
    }
}
