//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line, key_value_line};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: Palette) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        palette.muted,
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Build the help content lines grouped by category.
fn build_help_content(palette: Palette) -> Vec<Line<'static>> {
    let header = |title: &'static str| Line::from(Span::styled(title, palette.section_header));
    let entry = |key: &str, desc: &str| key_value_line(key, desc, palette.key_hint, palette.cell_text);

    vec![
        header("Search"),
        entry("/ Ctrl+f", "Focus the search bar"),
        entry("Enter", "Run the search (blank input is ignored)"),
        entry("Esc Tab", "Leave the search bar"),
        entry("m", "Load the next page"),
        empty_line(),
        header("Results"),
        entry("h j k l", "Move the cursor"),
        entry("← ↓ ↑ →", "Move the cursor"),
        entry("g G", "First / last result"),
        entry("Enter Space", "Open the image viewer"),
        empty_line(),
        header("Image Viewer"),
        entry("→ l n", "Next image (wraps to first)"),
        entry("← h p", "Previous image (wraps to last)"),
        entry("Esc q", "Close the viewer"),
        empty_line(),
        header("Application"),
        entry("?", "Toggle this help"),
        entry("q Ctrl+c", "Quit"),
    ]
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
