//! TUI rendering and the event loop (impure shell).

pub mod constants;
mod help;
mod helpers;
mod image_modal;
pub mod layout;
mod search_input;
pub mod styles;

pub use help::render_help_overlay;
pub use image_modal::render_image_modal;
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Palette};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::source::FetchWorker;
use crate::state::{
    handle_viewer_key, search_input as input, AppState, FetchRequest, FocusPane, SettleOutcome,
};
use constants::TICK_INTERVAL_MS;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    worker: FetchWorker,
    key_bindings: KeyBindings,
    palette: Palette,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(worker: FetchWorker, palette: Palette) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state: AppState::new(),
            worker,
            key_bindings: KeyBindings::default(),
            palette,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws on input, on resize,
    /// and on ticks where a fetch completed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK: Duration = Duration::from_millis(TICK_INTERVAL_MS);

        self.draw()?;

        loop {
            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        self.draw()?;
                    }
                    _ => {}
                }
            }

            if self.drain_completions() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Start every requested fetch in the background.
    fn spawn_fetches(&self, requests: Vec<FetchRequest>) {
        for request in requests {
            self.worker.spawn(request);
        }
    }

    /// Apply every completed fetch. Returns true if any changed the session.
    fn drain_completions(&mut self) -> bool {
        let mut changed = false;
        for completion in self.worker.poll() {
            let outcome = self
                .app_state
                .fetch_settled(completion.ticket, completion.result);
            changed |= outcome == SettleOutcome::Applied;
        }
        changed
    }

    /// Put `text` in the search bar and submit it, as if typed.
    fn submit_initial_query(&mut self, text: &str) {
        self.app_state.search_input = input::SearchInputState::with_text(text);
        let requests = self.app_state.submit_search();
        if requests.is_empty() {
            debug!("Initial query is blank, starting idle");
        }
        self.spawn_fetches(requests);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing or in an overlay
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Help overlay captures everything but its own toggles and quit
        if self.app_state.help_visible {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.app_state.help_visible = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        if handle_viewer_key(&mut self.app_state, key) {
            return false;
        }

        if self.app_state.focus == FocusPane::Search && self.handle_search_key(key) {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        if action == KeyAction::Quit {
            info!("Quit requested");
            return true;
        }

        let requests = self.app_state.handle_action(action);
        self.spawn_fetches(requests);
        false
    }

    /// Editing keys for the search bar. Returns true if the key was consumed.
    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        let state = std::mem::take(&mut self.app_state.search_input);
        let state = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                input::handle_char_input(state, ch)
            }
            KeyCode::Backspace => input::handle_backspace(state),
            KeyCode::Left => input::handle_cursor_left(state),
            KeyCode::Right => input::handle_cursor_right(state),
            KeyCode::Home => input::handle_home(state),
            KeyCode::End => input::handle_end(state),
            KeyCode::Enter => {
                self.app_state.search_input = state;
                let requests = self.app_state.submit_search();
                if requests.is_empty() {
                    debug!("Ignoring blank search");
                }
                self.spawn_fetches(requests);
                return true;
            }
            KeyCode::Esc | KeyCode::Tab => {
                self.app_state.search_input = state;
                self.app_state.focus = FocusPane::Grid;
                return true;
            }
            _ => {
                self.app_state.search_input = state;
                return false;
            }
        };
        self.app_state.search_input = state;
        true
    }

    /// Render the current frame
    ///
    /// Records the grid width so up/down cursor moves match what is on screen.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
        let grid = layout::calculate_areas(frame_area).grid;
        self.app_state.grid_columns = layout::grid_columns(grid.width);

        let palette = self.palette;
        let state = &self.app_state;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, palette);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
// They are gated with cfg to ensure they're not accessible from outside the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// This allows tests to construct TuiApp directly without going through
    /// terminal initialization. Used by acceptance test harness.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        worker: FetchWorker,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            terminal,
            app_state,
            worker,
            key_bindings,
            palette: Palette::default(),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Block until no fetch is in flight or `timeout` passes without a completion.
    ///
    /// Returns the number of completions applied (stale ones excluded).
    pub(crate) fn settle_fetches(&mut self, timeout: Duration) -> usize {
        let mut applied = 0;
        while self.app_state.session().is_loading() {
            let Some(completion) = self.worker.wait(timeout) else {
                break;
            };
            let outcome = self
                .app_state
                .fetch_settled(completion.ticket, completion.result);
            if outcome == SettleOutcome::Applied {
                applied += 1;
            }
        }
        applied
    }
}

/// Startup options for the TUI.
///
/// Carries configuration from the CLI into the impure shell; domain state
/// stays in `AppState`.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Query to run as soon as the screen is up. Maps to `--query`.
    pub initial_query: Option<String>,

    /// Whether to render with colors. Maps to `--no-color` and `NO_COLOR`.
    pub colors: ColorConfig,
}

impl CliArgs {
    /// Options from the parsed command line.
    pub fn new(initial_query: Option<String>, colors: ColorConfig) -> Self {
        Self {
            initial_query,
            colors,
        }
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_worker(worker: FetchWorker, args: CliArgs) -> Result<(), TuiError> {
    let mut app = TuiApp::new(worker, Palette::new(args.colors))?;

    if let Some(query) = args.initial_query.as_deref() {
        app.submit_initial_query(query);
    }

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
