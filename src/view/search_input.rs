//! Search bar widget.

use crate::state::SearchInputState;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget.
///
/// Shows a block cursor while focused; otherwise the text is shown plain with
/// a hint on how to focus it.
pub struct SearchInput<'a> {
    input: &'a SearchInputState,
    focused: bool,
    palette: Palette,
}

impl<'a> SearchInput<'a> {
    /// Widget over `input`, drawn focused or not.
    pub fn new(input: &'a SearchInputState, focused: bool, palette: Palette) -> Self {
        Self {
            input,
            focused,
            palette,
        }
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let text = self.input.text();
        if !self.focused {
            if text.is_empty() {
                return vec![Span::styled("Press / to search", self.palette.muted)];
            }
            return vec![Span::raw(text.to_string())];
        }

        let cursor = self.input.cursor();
        let before: String = text.chars().take(cursor).collect();
        let mut rest = text.chars().skip(cursor);
        let cursor_char = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        vec![
            Span::raw(before),
            Span::styled(
                cursor_char,
                Style::default().add_modifier(Modifier::REVERSED),
            ),
            Span::raw(after),
        ]
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.palette.focused_border
        } else {
            self.palette.unfocused_border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(border_style);

        Paragraph::new(Line::from(self.spans()))
            .block(block)
            .render(area, buf);
    }
}
