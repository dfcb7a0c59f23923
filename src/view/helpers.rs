//! Small rendering helpers shared by overlays.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

/// An empty line, used as a spacer between sections.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `  key  description` with the key padded to a fixed column.
pub fn key_value_line(key: &str, value: &str, key_style: Style, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<12}"), key_style),
        Span::styled(value.to_string(), value_style),
    ])
}

/// Rect centered in `area` covering the given percentages of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn scale(length: u16, percent: u16) -> u16 {
    (u32::from(length) * u32::from(percent.min(100)) / 100) as u16
}

/// Cut `text` to at most `max_width` display columns, ending in `…` if cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        // Reserve one column for the ellipsis
        if used + width > max_width - 1 {
            break;
        }
        out.push(ch);
        used += width;
    }
    out.push('…');
    out
}
