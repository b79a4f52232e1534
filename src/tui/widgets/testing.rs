/// Testing utilities for widget rendering
///
/// Helpers for rendering widgets in isolation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
};
use crate::config::DisplayConfig;
use crate::formatting::BoxChars;
use super::RenderableWidget;

/// Create a test DisplayConfig with unicode box characters
pub fn test_config() -> DisplayConfig {
    DisplayConfig {
        selection_fg: Color::Rgb(255, 200, 0), // Gold
        unfocused_selection_fg: Color::Rgb(127, 100, 0),
        disabled_fg: Color::DarkGray,
        box_chars: BoxChars::unicode(),
    }
}

/// Create a test DisplayConfig with ASCII box characters
pub fn test_config_ascii() -> DisplayConfig {
    DisplayConfig {
        box_chars: BoxChars::ascii(),
        ..test_config()
    }
}

/// Render a widget to a buffer and return it for testing
pub fn render_widget(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
) -> Buffer {
    render_widget_with_config(widget, width, height, &test_config())
}

/// Render a widget to a buffer with a custom config
pub fn render_widget_with_config(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    config: &DisplayConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);
    buf
}
