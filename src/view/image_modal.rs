//! Image viewer overlay.
//!
//! Terminals cannot show the photo itself, so the overlay lists the image's
//! metadata and full-size URL, plus its position in the loaded results.

use crate::model::ImageItem;
use crate::state::AppState;
use crate::view::constants::{VIEWER_HEIGHT_PERCENT, VIEWER_WIDTH_PERCENT};
use crate::view::helpers::{centered_rect, empty_line};
use crate::view::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the viewer for the open image. No-op when the viewer is closed.
pub fn render_image_modal(frame: &mut Frame, state: &AppState, palette: Palette) {
    let Some(image) = state.gallery.open_image() else {
        return;
    };

    let area = centered_rect(VIEWER_WIDTH_PERCENT, VIEWER_HEIGHT_PERCENT, frame.area());
    frame.render_widget(Clear, area);

    let position = state
        .gallery
        .position(state.items())
        .map(|index| format!("{} / {}", index + 1, state.items().len()))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.focused_border)
        .title(format!(" {} ", image.label()))
        .title_bottom(Line::from(position).alignment(Alignment::Right));

    let paragraph = Paragraph::new(image_lines(image, palette))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);

    render_hint(frame, area, palette);
}

fn image_lines(image: &ImageItem, palette: Palette) -> Vec<Line<'static>> {
    let field = |name: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{name:<8}"), palette.section_header),
            Span::styled(value, palette.cell_text),
        ])
    };

    let tags = if image.tags().is_empty() {
        "(none)".to_string()
    } else {
        image.tags().to_string()
    };

    vec![
        empty_line(),
        field("Id", image.id().to_string()),
        field("Author", image.user().to_string()),
        field("Tags", tags),
        empty_line(),
        field("Full", image.full_url().to_string()),
        field("Preview", image.thumbnail_url().to_string()),
    ]
}

fn render_hint(frame: &mut Frame, area: Rect, palette: Palette) {
    if area.height < 3 {
        return;
    }
    let hint_area = Rect {
        x: area.x + 1,
        y: area.y + area.height - 2,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        "←/h previous   →/l next   Esc close",
        palette.muted,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}
