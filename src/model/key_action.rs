//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Grid cursor
    /// Move grid cursor up one row. Default: k/↑
    CursorUp,
    /// Move grid cursor down one row. Default: j/↓
    CursorDown,
    /// Move grid cursor to the previous image. Default: h/←
    CursorLeft,
    /// Move grid cursor to the next image. Default: l/→
    CursorRight,
    /// Jump to the first image. Default: g/Home
    CursorFirst,
    /// Jump to the last loaded image. Default: G/End
    CursorLast,

    // Search
    /// Focus the search bar for typing. Default: //Ctrl+f
    StartSearch,
    /// Request the next page of results. Default: m
    LoadMore,

    // Viewer
    /// Open the image under the grid cursor. Default: Enter/Space
    OpenImage,
    /// Close the image viewer. Default: Esc (viewer only)
    CloseImage,
    /// Show the next image, wrapping at the end. Default: →/l/n (viewer only)
    NextImage,
    /// Show the previous image, wrapping at the start. Default: ←/h/p (viewer only)
    PrevImage,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
