//! Shared styles for the search screen.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// ===== Palette =====

/// Styles used across widgets, resolved once per frame.
///
/// With colors disabled every style falls back to modifiers only, so
/// focus and selection stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Border of the focused pane.
    pub focused_border: Style,
    /// Border of other panes and grid cells.
    pub unfocused_border: Style,
    /// Highlighted grid cell.
    pub selected_cell: Style,
    /// Grid cell labels.
    pub cell_text: Style,
    /// Secondary text and hints.
    pub muted: Style,
    /// Error messages.
    pub error: Style,
    /// Loading indicators.
    pub loading: Style,
    /// Headings in overlays.
    pub section_header: Style,
    /// Key names in the help overlay.
    pub key_hint: Style,
}

impl Palette {
    /// Colored palette, or monochrome when colors are disabled.
    pub fn new(colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self::monochrome();
        }
        Self {
            focused_border: Style::default().fg(Color::Cyan),
            unfocused_border: Style::default().fg(Color::DarkGray),
            selected_cell: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            cell_text: Style::default().fg(Color::White),
            muted: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            loading: Style::default().fg(Color::Yellow),
            section_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_hint: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }

    fn monochrome() -> Self {
        Self {
            focused_border: Style::default().add_modifier(Modifier::BOLD),
            unfocused_border: Style::default(),
            selected_cell: Style::default().add_modifier(Modifier::REVERSED),
            cell_text: Style::default(),
            muted: Style::default().add_modifier(Modifier::DIM),
            error: Style::default().add_modifier(Modifier::BOLD),
            loading: Style::default().add_modifier(Modifier::ITALIC),
            section_header: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            key_hint: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}
