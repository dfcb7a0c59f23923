//! Search bar text editing (pure state transitions).
//!
//! All functions are pure - no side effects, testable without TUI.
//! The cursor counts characters, not bytes, so multi-byte input edits cleanly.

/// Text being typed into the search bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInputState {
    text: String,
    cursor: usize,
}

impl SearchInputState {
    /// Empty input with the cursor at the start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefilled input with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current buffer contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

/// Insert a character at the cursor and advance it.
pub fn handle_char_input(state: SearchInputState, ch: char) -> SearchInputState {
    let mut state = state;
    let offset = state.byte_offset(state.cursor);
    state.text.insert(offset, ch);
    state.cursor += 1;
    state
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(state: SearchInputState) -> SearchInputState {
    if state.cursor == 0 {
        return state;
    }
    let mut state = state;
    let offset = state.byte_offset(state.cursor - 1);
    state.text.remove(offset);
    state.cursor -= 1;
    state
}

/// Move cursor left by one position. Saturates at 0.
pub fn handle_cursor_left(state: SearchInputState) -> SearchInputState {
    SearchInputState {
        cursor: state.cursor.saturating_sub(1),
        ..state
    }
}

/// Move cursor right by one position. Saturates at text length.
pub fn handle_cursor_right(state: SearchInputState) -> SearchInputState {
    let max_cursor = state.text.chars().count();
    SearchInputState {
        cursor: (state.cursor + 1).min(max_cursor),
        ..state
    }
}

/// Move cursor to the start of the text.
pub fn handle_home(state: SearchInputState) -> SearchInputState {
    SearchInputState { cursor: 0, ..state }
}

/// Move cursor to the end of the text.
pub fn handle_end(state: SearchInputState) -> SearchInputState {
    let cursor = state.text.chars().count();
    SearchInputState { cursor, ..state }
}
