/// HelpBar - bottom line with the status message and key hints
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
};
use unicode_width::UnicodeWidthStr;

use super::RenderableWidget;
use crate::config::DisplayConfig;

const SELECTOR_HINTS: &str = "←/→ switch  Enter open  Del clear  q quit";
const PICKER_HINTS: &str = "↑/↓ move  A-Z jump  Enter select  Esc cancel";

#[derive(Debug, Clone)]
pub struct HelpBar<'a> {
    pub picker_open: bool,
    pub status: Option<&'a str>,
}

impl HelpBar<'_> {
    pub fn hints(&self) -> &'static str {
        if self.picker_open {
            PICKER_HINTS
        } else {
            SELECTOR_HINTS
        }
    }
}

impl RenderableWidget for HelpBar<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let hints = self.hints();
        let hints_width = hints.width() as u16;
        let hints_x = area.right().saturating_sub(hints_width).max(area.x);
        buf.set_stringn(
            hints_x,
            area.y,
            hints,
            area.width as usize,
            Style::default().fg(config.unfocused_selection_fg),
        );

        // Status message gets whatever space is left of the hints
        if let Some(status) = self.status {
            let room = hints_x.saturating_sub(area.x + 1) as usize;
            buf.set_stringn(area.x, area.y, status, room, Style::default().fg(config.selection_fg));
        }
    }
}
