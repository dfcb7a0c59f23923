//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::keybindings::KeyBindings;
use crate::model::PageSize;
use crate::source::FetchWorker;
use crate::state::{AppState, FocusPane};
use crate::test_support::FakeProvider;
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;

/// How long to wait for a single fetch before giving up.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> backed by a [`FakeProvider`], so searches
/// resolve in memory.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    provider: Arc<FakeProvider>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Harness over a provider with `total_hits` results, default page size (12)
    /// and an 80x24 terminal.
    pub fn with_total_hits(total_hits: u64) -> Self {
        Self::with_options(total_hits, PageSize::DEFAULT, 80, 24)
    }

    pub fn with_options(total_hits: u64, page_size: PageSize, width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");
        let provider = Arc::new(FakeProvider::new(total_hits));
        let worker = FetchWorker::new(provider.clone(), page_size);
        let app = TuiApp::new_for_test(terminal, AppState::new(), worker, KeyBindings::default());

        Self {
            app,
            provider,
            running: true,
        }
    }

    /// The provider behind the worker, for queuing failures and inspecting calls.
    pub fn provider(&self) -> &FakeProvider {
        &self.provider
    }

    /// Send a single key event
    ///
    /// Returns `true` if app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Focus the search bar, replace its text with `query`, and press Enter.
    ///
    /// Does not wait for the fetch; call [`Self::settle`] for that.
    pub fn search(&mut self, query: &str) {
        if self.state().focus != FocusPane::Search {
            self.send_key(KeyCode::Char('/'));
        }
        let existing = self.state().search_input.text().chars().count();
        self.send_key(KeyCode::End);
        for _ in 0..existing {
            self.send_key(KeyCode::Backspace);
        }
        self.type_text(query);
        self.send_key(KeyCode::Enter);
    }

    /// Wait for the in-flight fetch (if any) to land. Returns completions applied.
    pub fn settle(&mut self) -> usize {
        self.app.settle_fetches(FETCH_TIMEOUT)
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
