/// TeamPicker - the collapsed selector box for one slot
///
/// Shows the slot label in the border, the chosen team (or the placeholder)
/// inside, and a dropdown marker on the right.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::buffer_utils::draw_titled_box;
use super::RenderableWidget;
use crate::config::DisplayConfig;
use crate::selection::Slot;
use crate::teams::Team;

#[derive(Debug, Clone)]
pub struct TeamPicker {
    pub slot: Slot,
    pub team: Option<&'static Team>,
    pub focused: bool,
    pub open: bool,
}

impl TeamPicker {
    pub fn new(slot: Slot, team: Option<&'static Team>) -> Self {
        Self {
            slot,
            team,
            focused: false,
            open: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

impl RenderableWidget for TeamPicker {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 6 || area.height < 3 {
            return;
        }

        let border_style = if self.open {
            Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD)
        } else if self.focused {
            Style::default().fg(config.selection_fg)
        } else {
            Style::default()
        };
        draw_titled_box(buf, area, self.slot.label(), &config.box_chars, border_style);

        let y = area.y + 1;
        let text_x = area.x + 2;
        let max_text_width = (area.width - 5) as usize;
        match self.team {
            Some(team) => {
                buf.set_stringn(text_x, y, team.name, max_text_width, Style::default());
            }
            None => {
                let style = Style::default().fg(config.disabled_fg);
                buf.set_stringn(text_x, y, self.slot.placeholder(), max_text_width, style);
            }
        }

        let marker_style = if self.focused {
            Style::default().fg(config.selection_fg)
        } else {
            Style::default().fg(config.unfocused_selection_fg)
        };
        buf.set_string(area.right() - 3, y, &config.box_chars.dropdown, marker_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teams;
    use crate::tui::testing::assert_buffer;
    use crate::tui::widgets::testing::{render_widget, test_config, test_config_ascii, render_widget_with_config};

    #[test]
    fn test_empty_picker() {
        let widget = TeamPicker::new(Slot::Away, None);
        let buf = render_widget(&widget, 24, 3);
        assert_buffer(
            &buf,
            &[
                "╭─Away Team────────────╮",
                "│ Select Away Team   ▼ │",
                "╰──────────────────────╯",
            ],
        );
    }

    #[test]
    fn test_picker_with_team_ascii() {
        let widget = TeamPicker::new(Slot::Home, teams::find("KC"));
        let buf = render_widget_with_config(&widget, 24, 3, &test_config_ascii());
        assert_buffer(
            &buf,
            &[
                "+-Home Team------------+",
                "| Kansas City Chiefs v |",
                "+----------------------+",
            ],
        );
    }

    #[test]
    fn test_long_name_is_truncated() {
        let widget = TeamPicker::new(Slot::Away, teams::find("WAS"));
        let buf = render_widget(&widget, 16, 3);
        assert_buffer(
            &buf,
            &[
                "╭─Away Team────╮",
                "│ Washington ▼ │",
                "╰──────────────╯",
            ],
        );
    }

    #[test]
    fn test_focused_border_uses_selection_color() {
        let config = test_config();
        let widget = TeamPicker::new(Slot::Away, None).focused(true);
        let buf = render_widget(&widget, 24, 3);
        assert_eq!(buf[(0, 0)].fg, config.selection_fg);

        let unfocused = render_widget(&TeamPicker::new(Slot::Away, None), 24, 3);
        assert_ne!(unfocused[(0, 0)].fg, config.selection_fg);
    }

    #[test]
    fn test_placeholder_uses_disabled_color() {
        let config = test_config();
        let buf = render_widget(&TeamPicker::new(Slot::Home, None), 24, 3);
        assert_eq!(buf[(2, 1)].fg, config.disabled_fg);
    }

    #[test]
    fn test_too_small_renders_nothing() {
        let buf = render_widget(&TeamPicker::new(Slot::Home, None), 5, 3);
        assert_buffer(&buf, &["", "", ""]);
    }
}
