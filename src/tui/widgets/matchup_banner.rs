/// MatchupBanner - "Selected Matchup" heading and the away @ home line
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use super::RenderableWidget;
use crate::config::DisplayConfig;
use crate::selection::Matchup;

pub const MATCHUP_HEADING: &str = "Selected Matchup";

#[derive(Debug, Clone)]
pub struct MatchupBanner {
    pub matchup: Option<Matchup>,
}

/// Write `text` horizontally centered on row `y` of `area`
pub fn set_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    let width = text.width() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    buf.set_stringn(x, y, text, area.width as usize, style);
}

impl RenderableWidget for MatchupBanner {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let Some(matchup) = self.matchup else {
            return;
        };
        if area.height < 2 {
            return;
        }

        let heading_style = Style::default()
            .fg(config.selection_fg)
            .add_modifier(Modifier::BOLD);
        set_centered(buf, area, area.y, MATCHUP_HEADING, heading_style);
        set_centered(buf, area, area.y + 1, &matchup.to_string(), Style::default());
    }
}
