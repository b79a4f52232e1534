/// Widget-based rendering infrastructure for the TUI
///
/// Widgets render themselves directly to a ratatui Buffer, so each one can
/// be tested in isolation against a test buffer.

#[cfg(test)]
pub mod testing;

pub mod buffer_utils;

pub mod team_picker;
pub use team_picker::TeamPicker;

pub mod option_list;
pub use option_list::OptionList;

pub mod matchup_banner;
pub use matchup_banner::MatchupBanner;

pub mod help_bar;
pub use help_bar::HelpBar;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);
}
