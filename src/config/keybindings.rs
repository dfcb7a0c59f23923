//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions for the results grid.
///
/// The image viewer and the search bar take keys before these bindings are
/// consulted, so grid keys like `h`/`l` stay free to mean something else there.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Vim-style grid movement
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::CursorUp);
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::CursorDown);
        keys.bind(KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::CursorLeft);
        keys.bind(KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::CursorRight);
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::CursorFirst);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::CursorLast);

        // Arrow keys
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::CursorUp);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::CursorDown);
        keys.bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::CursorLeft);
        keys.bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::CursorRight);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::CursorFirst);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::CursorLast);

        // Search
        keys.bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        keys.bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        keys.bind(KeyCode::Char('m'), KeyModifiers::NONE, KeyAction::LoadMore);

        // Viewer
        keys.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::OpenImage);
        keys.bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::OpenImage);

        // Application controls
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);

        keys
    }
}
