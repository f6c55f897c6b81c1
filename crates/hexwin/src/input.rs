//! Backend-agnostic input types
//!
//! Hosts convert their native button and key codes into these before invoking
//! the lifecycle callbacks on [`crate::Game`].

/// Backend-agnostic mouse button representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Additional mouse buttons (back, forward, etc.)
    Other(u8),
}

impl MouseButton {
    /// Map an SDL-style button index (1 = left, 2 = middle, 3 = right)
    pub const fn from_index(index: u8) -> Self {
        match index {
            1 => Self::Left,
            2 => Self::Middle,
            3 => Self::Right,
            n => Self::Other(n),
        }
    }
}

/// Backend-agnostic named key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Shift,
    Control,
    Alt,
    Super,
    /// Function keys F1-F12
    F(u8),
}

/// Backend-agnostic key representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A named key (Enter, Escape, arrows, etc.)
    Named(NamedKey),
    /// A character key (letters, numbers, symbols)
    Character(String),
    /// Unknown/unhandled key
    Unknown,
}
