//! Screen layout rendering.
//!
//! Pure layout logic - calculates the search bar, result grid and status
//! bar areas and renders them, followed by any overlay.

use crate::state::{AppState, FocusPane, SessionStatus};
use crate::view::constants::{
    GRID_CELL_HEIGHT, GRID_CELL_WIDTH, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT,
};
use crate::view::helpers::truncate_to_width;
use crate::view::search_input::SearchInput;
use crate::view::styles::Palette;
use crate::view::{help, image_modal};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Search bar.
    pub search: Rect,
    /// Result grid.
    pub grid: Rect,
    /// One-line status bar.
    pub status: Rect,
}

/// Split the frame into search bar, grid and status bar.
pub fn calculate_areas(frame_area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame_area);

    ScreenAreas {
        search: chunks[0],
        grid: chunks[1],
        status: chunks[2],
    }
}

/// Number of cells that fit side by side in a grid of this width. At least one.
pub fn grid_columns(grid_width: u16) -> usize {
    usize::from((grid_width / GRID_CELL_WIDTH).max(1))
}

/// Number of full cell rows that fit in a grid of this height. At least one.
fn grid_rows(grid_height: u16) -> usize {
    usize::from((grid_height / GRID_CELL_HEIGHT).max(1))
}

/// First visible row so the cursor row stays on screen.
fn first_visible_row(cursor: usize, columns: usize, visible_rows: usize) -> usize {
    let cursor_row = cursor / columns.max(1);
    cursor_row.saturating_sub(visible_rows.saturating_sub(1))
}

/// Render the full screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: Palette) {
    let areas = calculate_areas(frame.area());

    frame.render_widget(
        SearchInput::new(&state.search_input, state.focus == FocusPane::Search, palette),
        areas.search,
    );
    render_grid(frame, areas.grid, state, palette);
    render_status_bar(frame, areas.status, state, palette);

    if state.gallery.is_open() {
        image_modal::render_image_modal(frame, state, palette);
    }
    if state.help_visible {
        help::render_help_overlay(frame, palette);
    }
}

fn render_grid(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let items = state.items();
    if items.is_empty() {
        let message = match (state.session().query(), state.session().status()) {
            (None, _) => "Type a query and press Enter to search Pixabay",
            (Some(_), SessionStatus::Loading { .. }) => "Searching…",
            (Some(_), SessionStatus::Failed { .. }) => "Search failed. Press m to retry",
            (Some(_), SessionStatus::Idle) => "No images found",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(message, palette.muted))),
            area,
        );
        return;
    }

    let columns = grid_columns(area.width);
    let visible_rows = grid_rows(area.height);
    let first_row = first_visible_row(state.grid_cursor(), columns, visible_rows);
    let first_index = first_row * columns;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(GRID_CELL_HEIGHT); visible_rows])
        .split(area);

    for (row_offset, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(GRID_CELL_WIDTH); columns])
            .split(*row_area);

        for (column, cell_area) in cells.iter().enumerate() {
            let index = first_index + row_offset * columns + column;
            let Some(item) = items.get(index) else {
                return;
            };
            let selected = index == state.grid_cursor() && state.focus == FocusPane::Grid;
            let (border, text) = if selected {
                (palette.selected_cell, palette.selected_cell)
            } else {
                (palette.unfocused_border, palette.cell_text)
            };

            let inner_width = usize::from(cell_area.width.saturating_sub(2));
            let lines = vec![
                Line::from(Span::styled(truncate_to_width(&item.label(), inner_width), text)),
                Line::from(Span::styled(
                    truncate_to_width(&format!("by {}", item.user()), inner_width),
                    palette.muted,
                )),
                Line::from(Span::styled(format!("#{}", item.id()), palette.muted)),
            ];
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", index + 1));
            frame.render_widget(Paragraph::new(lines).block(block), *cell_area);
        }
    }
}

/// One-line summary of the session for the status bar.
pub fn status_text(state: &AppState) -> String {
    let session = state.session();
    let Some(query) = session.query() else {
        return "/ search · ? help · q quit".to_string();
    };

    let loaded = session.items().len();
    let mut parts = vec![format!("\"{}\"", query)];
    parts.push(match session.total_hits() {
        Some(total) => format!("{loaded} of {total}"),
        None => format!("{loaded} loaded"),
    });
    parts.push(format!("page {}", session.page()));

    match session.status() {
        SessionStatus::Loading { .. } => parts.push("Loading…".to_string()),
        SessionStatus::Failed { message } => {
            parts.push(format!("Error: {message} (m to retry)"));
        }
        SessionStatus::Idle if session.can_load_more() => parts.push("m: load more".to_string()),
        SessionStatus::Idle if loaded > 0 && !session.has_more() => {
            parts.push("end of results".to_string());
        }
        SessionStatus::Idle => {}
    }

    parts.join(" · ")
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let style = match state.session().status() {
        SessionStatus::Failed { .. } => palette.error,
        SessionStatus::Loading { .. } => palette.loading,
        SessionStatus::Idle => palette.muted,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(status_text(state), style))),
        area,
    );
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
