//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the search bar in lines (border + input line).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of one result cell in columns, including its border.
///
/// The grid fits as many cells per row as the terminal allows, never fewer than one.
pub const GRID_CELL_WIDTH: u16 = 26;

/// Height of one result cell in lines: border, tags, author, id.
pub const GRID_CELL_HEIGHT: u16 = 5;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the image viewer overlay.
pub const VIEWER_WIDTH_PERCENT: u16 = 80;

/// Height percentage for the image viewer overlay.
pub const VIEWER_HEIGHT_PERCENT: u16 = 60;

/// Event poll interval; fetch completions are drained on each tick.
pub const TICK_INTERVAL_MS: u64 = 100;
