/// Buffer utilities for drawing borders and boxes
///
/// All functions work with both ASCII and Unicode box characters.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
};
use crate::formatting::BoxChars;

/// Draw a simple box border around an area
///
/// # Example
/// ```text
/// draw_box(buf, area, &config.box_chars, Style::default());
/// // Draws: ╭───╮
/// //        │   │
/// //        ╰───╯
/// ```
pub fn draw_box(
    buf: &mut Buffer,
    area: Rect,
    box_chars: &BoxChars,
    style: Style,
) {
    draw_titled_box(buf, area, "", box_chars, style);
}

/// Draw a box with a title in the top border
///
/// # Example
/// ```text
/// draw_titled_box(buf, area, "Away Team", &config.box_chars, Style::default());
/// // Draws: ╭─Away Team─╮
/// //        │           │
/// //        ╰───────────╯
/// ```
pub fn draw_titled_box(
    buf: &mut Buffer,
    area: Rect,
    title: &str,
    box_chars: &BoxChars,
    style: Style,
) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let x = area.x;
    let y = area.y;
    let right = area.right() - 1;
    let bottom = area.bottom() - 1;

    buf.set_string(x, y, &box_chars.top_left, style);
    buf.set_string(right, y, &box_chars.top_right, style);
    buf.set_string(x, bottom, &box_chars.bottom_left, style);
    buf.set_string(right, bottom, &box_chars.bottom_right, style);

    for i in x + 1..right {
        buf.set_string(i, y, &box_chars.horizontal, style);
        buf.set_string(i, bottom, &box_chars.horizontal, style);
    }

    // Title sits after one horizontal char, truncated to the border
    if !title.is_empty() && area.width > 3 {
        let max_title_width = (area.width - 3) as usize;
        buf.set_stringn(x + 2, y, title, max_title_width, style);
    }

    for i in y + 1..bottom {
        buf.set_string(x, i, &box_chars.vertical, style);
        buf.set_string(right, i, &box_chars.vertical, style);
    }
}
