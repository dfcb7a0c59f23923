//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod gallery;
pub mod search_input;
pub mod search_session;
pub mod viewer_key_handler;

// Re-export for convenience
pub use app_state::{AppState, FocusPane};
pub use gallery::{GalleryNavigator, GallerySelection};
pub use search_input::SearchInputState;
pub use search_session::{
    FetchRequest, FetchTicket, InvalidQuery, LoadMoreRejected, SearchQuery, SessionEffect,
    SessionEvent, SessionState, SessionStatus, SettleOutcome,
};
pub use viewer_key_handler::handle_viewer_key;
