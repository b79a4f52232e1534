use crate::config::DisplayConfig;
use crate::selection::{Selection, Slot, TeamOption};
/// OptionList - the open dropdown for one slot
///
/// Features:
/// - Placeholder row followed by every team in registry order
/// - Excluded teams stay visible, dimmed and marked
/// - Selection indicator on the cursor row
/// - Scrolls to keep the cursor visible
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Clear, Widget},
};

use super::buffer_utils::draw_box;
use super::RenderableWidget;

#[derive(Debug, Clone)]
pub struct OptionList {
    pub slot: Slot,
    pub options: Vec<TeamOption>,
    /// 0 = placeholder, i + 1 = options[i]
    pub cursor: usize,
}

impl OptionList {
    pub fn new(slot: Slot, selection: &Selection, cursor: usize) -> Self {
        Self {
            slot,
            options: selection.available_for(slot),
            cursor,
        }
    }

    fn row_count(&self) -> usize {
        self.options.len() + 1
    }

    /// First row shown when `visible` rows fit
    pub fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 {
            return 0;
        }
        let max_offset = self.row_count().saturating_sub(visible);
        self.cursor.saturating_sub(visible - 1).min(max_offset)
    }
}

impl RenderableWidget for OptionList {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 8 || area.height < 3 {
            return;
        }

        Clear.render(area, buf);
        let border_style = Style::default().fg(config.selection_fg);
        draw_box(buf, area, &config.box_chars, border_style);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width - 2,
            height: area.height - 2,
        };
        let visible = inner.height as usize;
        let offset = self.scroll_offset(visible);
        let label_x = inner.x + 3;
        let max_label_width = inner.width.saturating_sub(5) as usize;
        let marker_x = inner.right() - 2;

        for (line, row) in (offset..self.row_count()).take(visible).enumerate() {
            let y = inner.y + line as u16;
            let is_cursor = row == self.cursor;

            let (label, excluded) = match row.checked_sub(1).and_then(|i| self.options.get(i)) {
                Some(option) => (option.team.name, option.excluded),
                None => (self.slot.placeholder(), false),
            };

            let mut style = if excluded {
                Style::default().fg(config.disabled_fg)
            } else {
                Style::default()
            };
            if is_cursor {
                style = style.fg(config.selection_fg).add_modifier(Modifier::BOLD);
            }

            if is_cursor {
                let selector = format!(" {} ", config.box_chars.selector);
                buf.set_string(inner.x, y, &selector, style);
            }
            buf.set_stringn(label_x, y, label, max_label_width, style);
            if excluded {
                buf.set_string(marker_x, y, &config.box_chars.disabled, style);
            }
        }
    }
}
