//! Application state and transitions.
//!
//! AppState is the root state type containing the search session, the image
//! viewer and all UI state. It routes user intent into session events and
//! hands back the fetches the shell must perform.

use crate::model::{FetchError, ImageItem, KeyAction, ResultPage};
use crate::state::gallery::GalleryNavigator;
use crate::state::search_input::SearchInputState;
use crate::state::search_session::{
    self, FetchRequest, FetchTicket, SessionEffect, SessionEvent, SessionState, SettleOutcome,
};
use tracing::debug;

/// Which widget receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Search bar is being edited.
    #[default]
    Search,
    /// Result grid has the cursor.
    Grid,
}

/// Application state.
///
/// # State Machine
///
/// - **Session**: Idle → Loading → Idle/Failed, driven by [`SessionEvent`]s
/// - **Viewer**: Closed ⇄ Open, closed automatically on every accepted search
/// - **Focus**: Search ⇄ Grid
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search session. Replaced wholesale by each pure transition.
    session: SessionState,

    /// Image viewer selection.
    pub gallery: GalleryNavigator,

    /// Text in the search bar.
    pub search_input: SearchInputState,

    /// Which widget has keyboard focus.
    pub focus: FocusPane,

    /// Index of the highlighted grid cell. Always < item count when items exist.
    grid_cursor: usize,

    /// Number of grid columns at the last render; used for up/down moves.
    pub grid_columns: usize,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Startup state: search bar focused, nothing loaded.
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            gallery: GalleryNavigator::new(),
            search_input: SearchInputState::new(),
            focus: FocusPane::Search,
            grid_cursor: 0,
            grid_columns: 1,
            help_visible: false,
        }
    }

    /// The search session.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Accumulated results for the current query.
    pub fn items(&self) -> &[ImageItem] {
        self.session.items()
    }

    /// Index of the highlighted grid cell.
    pub fn grid_cursor(&self) -> usize {
        self.grid_cursor
    }

    /// Image under the grid cursor.
    pub fn highlighted(&self) -> Option<&ImageItem> {
        self.items().get(self.grid_cursor)
    }

    /// Feed one event through the session state machine.
    ///
    /// An accepted search closes the viewer and resets the grid, since the
    /// previously open image may not exist in the new results.
    pub fn dispatch(&mut self, event: SessionEvent) -> Vec<FetchRequest> {
        let is_submit = matches!(event, SessionEvent::SubmitQuery(_));
        let session = std::mem::take(&mut self.session);
        let (session, effects) = search_session::update(session, event);
        self.session = session;

        if is_submit && !effects.is_empty() {
            self.gallery.close();
            self.grid_cursor = 0;
            self.focus = FocusPane::Grid;
        }
        self.clamp_grid_cursor();

        effects
            .into_iter()
            .map(|effect| match effect {
                SessionEffect::Fetch(request) => request,
            })
            .collect()
    }

    /// Submit the text in the search bar.
    pub fn submit_search(&mut self) -> Vec<FetchRequest> {
        let text = self.search_input.text().to_string();
        self.dispatch(SessionEvent::SubmitQuery(text))
    }

    /// Request the next page, or retry the failed one.
    pub fn load_more(&mut self) -> Vec<FetchRequest> {
        self.dispatch(SessionEvent::LoadMore)
    }

    /// Reconcile a completed fetch.
    pub fn fetch_settled(
        &mut self,
        ticket: FetchTicket,
        result: Result<ResultPage, FetchError>,
    ) -> SettleOutcome {
        let session = std::mem::take(&mut self.session);
        let (session, outcome) = search_session::on_fetch_settled(session, ticket, result);
        self.session = session;
        self.clamp_grid_cursor();
        outcome
    }

    /// Open the viewer on the highlighted image.
    pub fn open_highlighted(&mut self) -> bool {
        let cursor = self.grid_cursor;
        self.gallery.open_at(self.session.items(), cursor)
    }

    /// Move to the next image in the viewer and keep the grid cursor on it.
    pub fn viewer_next(&mut self) {
        self.gallery.next(self.session.items());
        self.follow_viewer();
    }

    /// Move to the previous image in the viewer and keep the grid cursor on it.
    pub fn viewer_previous(&mut self) {
        self.gallery.previous(self.session.items());
        self.follow_viewer();
    }

    fn follow_viewer(&mut self) {
        if let Some(position) = self.gallery.position(self.session.items()) {
            self.grid_cursor = position;
        }
    }

    /// Apply a grid-level action. Returns fetches to perform.
    ///
    /// Viewer, search-bar and quit handling live in the key handlers; this
    /// covers actions that make sense while browsing the grid.
    pub fn handle_action(&mut self, action: KeyAction) -> Vec<FetchRequest> {
        let count = self.items().len();
        let columns = self.grid_columns.max(1);
        match action {
            KeyAction::CursorLeft => self.grid_cursor = self.grid_cursor.saturating_sub(1),
            KeyAction::CursorRight => {
                if count > 0 {
                    self.grid_cursor = (self.grid_cursor + 1).min(count - 1);
                }
            }
            KeyAction::CursorUp => self.grid_cursor = self.grid_cursor.saturating_sub(columns),
            KeyAction::CursorDown => {
                if count > 0 {
                    self.grid_cursor = (self.grid_cursor + columns).min(count - 1);
                }
            }
            KeyAction::CursorFirst => self.grid_cursor = 0,
            KeyAction::CursorLast => self.grid_cursor = count.saturating_sub(1),
            KeyAction::StartSearch => self.focus = FocusPane::Search,
            KeyAction::LoadMore => return self.load_more(),
            KeyAction::OpenImage => {
                self.open_highlighted();
            }
            KeyAction::CloseImage => self.gallery.close(),
            KeyAction::NextImage => self.viewer_next(),
            KeyAction::PrevImage => self.viewer_previous(),
            KeyAction::Help => self.help_visible = !self.help_visible,
            KeyAction::Quit => debug!("Quit is handled by the event loop"),
        }
        Vec::new()
    }

    fn clamp_grid_cursor(&mut self) {
        let count = self.items().len();
        self.grid_cursor = self.grid_cursor.min(count.saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
