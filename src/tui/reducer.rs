use tracing::debug;

use super::action::Action;
use super::state::{row_enabled, row_team, AppState, PickerState, PICKER_ROWS};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns the new state. No I/O.
pub fn reduce(state: AppState, action: Action) -> AppState {
    debug!("ACTION: {:?}", action);

    match state.picker {
        Some(picker) => reduce_open_picker(state, picker, action),
        None => reduce_closed(state, action),
    }
}

/// Actions while no dropdown is open
fn reduce_closed(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::FocusSlot(slot) => state.focus = slot,
        Action::FocusNext => state.focus = state.focus.other(),
        Action::OpenPicker => {
            state.picker = Some(PickerState::open(state.focus, &state.selection));
            state.status_message = None;
        }
        Action::ClearSlot => {
            state.selection.clear(state.focus);
            state.status_message = Some(format!("{} cleared", state.focus.label()));
        }
        _ => {}
    }
    state
}

/// Actions while a dropdown is open; focus changes are ignored
fn reduce_open_picker(mut state: AppState, mut picker: PickerState, action: Action) -> AppState {
    let enabled = |row: usize| row_enabled(&state.selection, picker.slot, row);

    match action {
        Action::CursorUp => {
            if let Some(row) = (0..picker.cursor).rev().find(|&r| enabled(r)) {
                picker.cursor = row;
            }
        }
        Action::CursorDown => {
            if let Some(row) = (picker.cursor + 1..PICKER_ROWS).find(|&r| enabled(r)) {
                picker.cursor = row;
            }
        }
        Action::CursorFirst => picker.cursor = 0,
        Action::CursorLast => {
            if let Some(row) = (0..PICKER_ROWS).rev().find(|&r| enabled(r)) {
                picker.cursor = row;
            }
        }
        Action::JumpToLetter(letter) => {
            if let Some(row) = find_by_letter(&state, picker, letter) {
                picker.cursor = row;
            }
        }
        Action::ConfirmPicker => {
            let key = picker.team().map(|t| t.abbreviation).unwrap_or("");
            state.selection.set(picker.slot, key);
            state.status_message = Some(match state.selection.get(picker.slot) {
                Some(team) => format!("{}: {}", picker.slot.label(), team.name),
                None => format!("{} cleared", picker.slot.label()),
            });
            state.focus = picker.slot;
            state.picker = None;
            return state;
        }
        Action::ClosePicker => {
            state.picker = None;
            return state;
        }
        _ => return state,
    }

    state.picker = Some(picker);
    state
}

/// Next enabled team after the cursor whose name starts with `letter`, wrapping
fn find_by_letter(state: &AppState, picker: PickerState, letter: char) -> Option<usize> {
    let letter = letter.to_ascii_uppercase();
    (1..PICKER_ROWS)
        .map(|offset| (picker.cursor + offset) % PICKER_ROWS)
        .find(|&row| {
            row_team(row).is_some_and(|team| {
                team.name.starts_with(letter) && !state.selection.is_excluded(picker.slot, team)
            })
        })
}
