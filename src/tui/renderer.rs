//! Draws the whole matchup screen from `AppState`
//!
//! ```text
//!               NFL Game Matchup
//!
//! ╭─Away Team──────────╮  VS  ╭─Home Team──────────╮
//! │ Buffalo Bills    ▼ │      │ Select Home Team ▼ │
//! ╰────────────────────╯      ╰────────────────────╯
//!
//!               Selected Matchup
//!     Buffalo Bills @ Kansas City Chiefs
//! ...
//! status                                  key hints
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::state::{AppState, PICKER_ROWS};
use super::widgets::matchup_banner::set_centered;
use super::widgets::{HelpBar, MatchupBanner, OptionList, RenderableWidget, TeamPicker};
use crate::config::DisplayConfig;
use crate::selection::Slot;

pub const TITLE: &str = "NFL Game Matchup";

/// Width of the gap holding "VS" between the two pickers
const VS_GAP_WIDTH: u16 = 6;

/// Height of a collapsed picker box
const PICKER_HEIGHT: u16 = 3;

/// Row (relative to the top) where the picker boxes start
const PICKER_TOP: u16 = 2;

/// Row (relative to the top) of the matchup banner
const MATCHUP_TOP: u16 = PICKER_TOP + PICKER_HEIGHT + 1;

/// Screen regions, all clipped to the terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub away: Rect,
    pub vs: Rect,
    pub home: Rect,
    pub matchup: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let picker_width = area.width.saturating_sub(VS_GAP_WIDTH) / 2;
        let row = |offset: u16, height: u16| {
            Rect::new(area.x, area.y.saturating_add(offset), area.width, height).intersection(area)
        };

        let pickers = row(PICKER_TOP, PICKER_HEIGHT);
        let away = Rect { width: picker_width, ..pickers }.intersection(area);
        let vs = Rect::new(pickers.x + picker_width, pickers.y + 1, VS_GAP_WIDTH, 1).intersection(area);
        let home_x = pickers.x + picker_width + VS_GAP_WIDTH;
        let home = Rect::new(home_x, pickers.y, area.right().saturating_sub(home_x), pickers.height)
            .intersection(area);

        Self {
            title: row(0, 1),
            away,
            vs,
            home,
            matchup: row(MATCHUP_TOP, 2),
            help: row(area.height.saturating_sub(1), 1),
        }
    }

    pub fn picker(&self, slot: Slot) -> Rect {
        match slot {
            Slot::Away => self.away,
            Slot::Home => self.home,
        }
    }

    /// Space for an open dropdown under `slot`'s picker, above the help line
    pub fn dropdown(&self, slot: Slot) -> Rect {
        let picker = self.picker(slot);
        let top = picker.bottom();
        let available = self.help.y.saturating_sub(top);
        let height = available.min(PICKER_ROWS as u16 + 2);
        Rect::new(picker.x, top, picker.width, height)
    }
}

/// Render the full screen for `state`
pub fn render(state: &AppState, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
    let layout = ScreenLayout::new(area);
    let open_slot = state.picker.map(|p| p.slot);

    if layout.title.height > 0 {
        let title_style = Style::default().add_modifier(Modifier::BOLD);
        set_centered(buf, layout.title, layout.title.y, TITLE, title_style);
    }

    for slot in [Slot::Away, Slot::Home] {
        let focused = match open_slot {
            Some(open) => open == slot,
            None => state.focus == slot,
        };
        TeamPicker::new(slot, state.selection.get(slot))
            .focused(focused)
            .open(open_slot == Some(slot))
            .render(layout.picker(slot), buf, config);
    }

    if layout.vs.height > 0 {
        set_centered(buf, layout.vs, layout.vs.y, "VS", Style::default().add_modifier(Modifier::BOLD));
    }

    MatchupBanner {
        matchup: state.selection.current_matchup(),
    }
    .render(layout.matchup, buf, config);

    HelpBar {
        picker_open: state.is_picker_open(),
        status: state.status_message.as_deref(),
    }
    .render(layout.help, buf, config);

    // Dropdown last so it overlays the banner
    if let Some(picker) = state.picker {
        OptionList::new(picker.slot, &state.selection, picker.cursor)
            .render(layout.dropdown(picker.slot), buf, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::PickerState;
    use crate::tui::testing::{buffer_lines, RENDER_WIDTH};
    use crate::tui::widgets::testing::test_config;
    use crate::teams;

    fn render_state(state: &AppState, width: u16, height: u16) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        render(state, buf.area, &mut buf, &test_config());
        buf
    }

    #[test]
    fn test_layout_regions() {
        let layout = ScreenLayout::new(Rect::new(0, 0, RENDER_WIDTH, 40));
        assert_eq!(layout.away, Rect::new(0, 2, 37, 3));
        assert_eq!(layout.vs, Rect::new(37, 3, 6, 1));
        assert_eq!(layout.home, Rect::new(43, 2, 37, 3));
        assert_eq!(layout.matchup, Rect::new(0, 6, RENDER_WIDTH, 2));
        assert_eq!(layout.help, Rect::new(0, 39, RENDER_WIDTH, 1));
        assert_eq!(layout.dropdown(Slot::Home), Rect::new(43, 5, 37, 34));
    }

    #[test]
    fn test_layout_tiny_terminal() {
        let area = Rect::new(0, 0, 10, 4);
        let layout = ScreenLayout::new(area);
        assert_eq!(layout.matchup.height, 0);
        assert_eq!(layout.dropdown(Slot::Away).height, 0);
        // nothing panics when drawing into it
        let mut buf = Buffer::empty(area);
        let state = AppState {
            picker: Some(PickerState { slot: Slot::Away, cursor: 0 }),
            ..Default::default()
        };
        render(&state, area, &mut buf, &test_config());
    }

    #[test]
    fn test_initial_screen() {
        let lines = buffer_lines(&render_state(&AppState::default(), RENDER_WIDTH, 12));
        assert_eq!(lines[0].trim(), TITLE);
        assert!(lines[2].contains("Away Team"));
        assert!(lines[2].contains("Home Team"));
        assert!(lines[3].contains("Select Away Team"));
        assert!(lines[3].contains("VS"));
        assert!(lines[3].contains("Select Home Team"));
        assert!(lines.iter().all(|l| !l.contains("Selected Matchup")));
        assert!(lines[11].contains("q quit"));
    }

    #[test]
    fn test_matchup_shown_when_both_selected() {
        let mut state = AppState::default();
        state.selection.set_away("BUF");
        state.selection.set_home("KC");

        let lines = buffer_lines(&render_state(&state, RENDER_WIDTH, 12));
        assert_eq!(lines[6].trim(), "Selected Matchup");
        assert_eq!(lines[7].trim(), "Buffalo Bills @ Kansas City Chiefs");
    }

    #[test]
    fn test_open_picker_disables_other_slot_team() {
        let mut state = AppState::default();
        state.selection.set_away("BUF");
        state.picker = Some(PickerState { slot: Slot::Home, cursor: 0 });

        let buf = render_state(&state, RENDER_WIDTH, 40);
        let lines = buffer_lines(&buf);

        // dropdown starts under the home picker at x = 43
        let row = 5 + 1 + teams::index_of("BUF").unwrap() as u16 + 1;
        assert!(lines[row as usize].contains("Buffalo Bills"));
        assert!(lines[row as usize].contains('✗'));
        assert_eq!(buf[(47, row)].fg, test_config().disabled_fg);

        let marked = lines.iter().filter(|l| l.contains('✗')).count();
        assert_eq!(marked, 1);
        assert!(lines[39].contains("Esc cancel"));
    }

    #[test]
    fn test_open_picker_without_exclusion() {
        let state = AppState {
            picker: Some(PickerState { slot: Slot::Away, cursor: 0 }),
            ..Default::default()
        };
        let lines = buffer_lines(&render_state(&state, RENDER_WIDTH, 40));
        assert!(lines.iter().all(|l| !l.contains('✗')));
        assert!(lines[6].contains("► Select Away Team"));
    }
}
