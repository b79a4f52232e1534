/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::Action;
use super::state::AppState;
use crate::selection::Slot;

/// Keys that work regardless of picker state
fn handle_global_keys(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

/// Keys while a dropdown is open
///
/// Letters jump to teams, so `j` and `k` are not cursor keys here.
fn handle_picker_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Up => Some(Action::CursorUp),
        KeyCode::Down => Some(Action::CursorDown),
        KeyCode::Home | KeyCode::PageUp => Some(Action::CursorFirst),
        KeyCode::End | KeyCode::PageDown => Some(Action::CursorLast),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ConfirmPicker),
        KeyCode::Esc => Some(Action::ClosePicker),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Action::JumpToLetter(c)),
        _ => None,
    }
}

/// Keys while both pickers are closed
fn handle_selector_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::FocusNext),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::FocusSlot(Slot::Away)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::FocusSlot(Slot::Home)),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down | KeyCode::Char('j') => {
            Some(Action::OpenPicker)
        }
        KeyCode::Backspace | KeyCode::Delete => Some(Action::ClearSlot),
        _ => None,
    }
}

/// Convert a key event to an action, given the current state
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?}", key);

    if let Some(action) = handle_global_keys(&key) {
        return Some(action);
    }

    if state.is_picker_open() {
        handle_picker_keys(key.code)
    } else {
        handle_selector_keys(key.code)
    }
}
