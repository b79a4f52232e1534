use crate::selection::Slot;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions, which are
/// produced from key events by `keys::key_to_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Focus between the two pickers
    FocusSlot(Slot),
    FocusNext,

    // Dropdown
    OpenPicker,
    ClosePicker,
    CursorUp,
    CursorDown,
    CursorFirst,
    CursorLast,
    /// Move to the next enabled team whose name starts with this letter
    JumpToLetter(char),
    /// Apply the row under the cursor to the picker's slot
    ConfirmPicker,

    /// Empty the focused slot
    ClearSlot,

    Quit,
}
