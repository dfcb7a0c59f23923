//! Keyboard handler for the image viewer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppState;

/// Handle keyboard input when the image viewer is open.
///
/// Returns `true` if the key was consumed by the viewer, `false` otherwise.
///
/// # Key Bindings
/// - Right/l/n: Next image (wraps last → first)
/// - Left/h/p: Previous image (wraps first → last)
/// - Esc/q/Enter: Close the viewer
///
/// # Behavior
/// - Navigation never loads more results
/// - Every other key is swallowed while the viewer is open, except Ctrl+C
/// - Returns false if the viewer is not open
pub fn handle_viewer_key(state: &mut AppState, key: KeyEvent) -> bool {
    if !state.gallery.is_open() {
        return false;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => state.viewer_next(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => state.viewer_previous(),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => state.gallery.close(),
        _ => {}
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::search_input::SearchInputState;
    use crate::test_support::result_page;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn viewer_open_on(index: usize, count: u64) -> AppState {
        let mut state = AppState::new();
        state.search_input = SearchInputState::with_text("cats");
        let request = state.submit_search().remove(0);
        state.fetch_settled(request.ticket, Ok(result_page(1, 1, count)));
        let items = state.items().to_vec();
        assert!(state.gallery.open_at(&items, index));
        state
    }

    #[test]
    fn ignored_when_viewer_closed() {
        let mut state = AppState::new();
        assert!(!handle_viewer_key(&mut state, key(KeyCode::Right)));
    }

    #[test]
    fn right_and_left_wrap() {
        let mut state = viewer_open_on(2, 3);

        assert!(handle_viewer_key(&mut state, key(KeyCode::Right)));
        assert_eq!(state.gallery.position(state.items()), Some(0));

        assert!(handle_viewer_key(&mut state, key(KeyCode::Char('h'))));
        assert_eq!(state.gallery.position(state.items()), Some(2));
    }

    #[test]
    fn escape_closes() {
        let mut state = viewer_open_on(0, 3);
        assert!(handle_viewer_key(&mut state, key(KeyCode::Esc)));
        assert!(!state.gallery.is_open());
    }

    #[test]
    fn other_keys_are_swallowed() {
        let mut state = viewer_open_on(1, 3);
        assert!(handle_viewer_key(&mut state, key(KeyCode::Char('m'))));
        assert!(state.gallery.is_open());
        assert!(!state.session().is_loading(), "Load more is blocked in the viewer");
    }

    #[test]
    fn ctrl_c_passes_through() {
        let mut state = viewer_open_on(1, 3);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!handle_viewer_key(&mut state, ctrl_c));
    }
}
