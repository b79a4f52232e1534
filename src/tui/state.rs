use crate::selection::{Selection, Slot};
use crate::teams::{self, Team};

/// Root application state - single source of truth
///
/// All state changes happen through the reducer; the renderer only reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub selection: Selection,
    /// Picker that receives Enter/Backspace while no dropdown is open
    pub focus: Slot,
    /// Open dropdown, if any
    pub picker: Option<PickerState>,
    pub status_message: Option<String>,
}

/// An open dropdown
///
/// Row 0 is the placeholder ("no selection"), row `i + 1` is `teams::all()[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerState {
    pub slot: Slot,
    pub cursor: usize,
}

/// Number of rows in a dropdown
pub const PICKER_ROWS: usize = 33;

impl PickerState {
    /// Open on the slot's current team, or on the placeholder
    pub fn open(slot: Slot, selection: &Selection) -> Self {
        let cursor = selection
            .get(slot)
            .and_then(|team| teams::index_of(team.abbreviation))
            .map(|idx| idx + 1)
            .unwrap_or(0);
        Self { slot, cursor }
    }

    /// Team under the cursor; None for the placeholder row
    pub fn team(&self) -> Option<&'static Team> {
        row_team(self.cursor)
    }
}

pub fn row_team(row: usize) -> Option<&'static Team> {
    row.checked_sub(1).and_then(|idx| teams::all().get(idx))
}

/// Whether a dropdown row can be chosen for `slot`
pub fn row_enabled(selection: &Selection, slot: Slot, row: usize) -> bool {
    match row_team(row) {
        Some(team) => !selection.is_excluded(slot, team),
        None => row == 0,
    }
}

impl AppState {
    pub fn is_picker_open(&self) -> bool {
        self.picker.is_some()
    }
}
