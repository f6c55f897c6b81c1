//! Conversion from winit input types to hexwin's backend-agnostic ones

use hexwin::{Key, MouseButton, NamedKey};
use winit::keyboard::Key as WinitKey;

/// Convert winit MouseButton to hexwin MouseButton
pub fn convert_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(4),
        winit::event::MouseButton::Forward => MouseButton::Other(5),
        winit::event::MouseButton::Other(n) => {
            MouseButton::Other(u8::try_from(n).unwrap_or(u8::MAX))
        }
    }
}

/// Convert winit Key to hexwin Key
pub fn convert_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(named) => convert_named_key(named).map_or(Key::Unknown, Key::Named),
        WinitKey::Character(text) => Key::Character(text.to_string()),
        _ => Key::Unknown,
    }
}

/// Convert winit NamedKey to hexwin NamedKey, `None` for keys hexwin does not name
pub fn convert_named_key(key: &winit::keyboard::NamedKey) -> Option<NamedKey> {
    use winit::keyboard::NamedKey as WN;

    Some(match key {
        WN::Enter => NamedKey::Enter,
        WN::Escape => NamedKey::Escape,
        WN::Backspace => NamedKey::Backspace,
        WN::Delete => NamedKey::Delete,
        WN::Tab => NamedKey::Tab,
        WN::Space => NamedKey::Space,
        WN::ArrowLeft => NamedKey::ArrowLeft,
        WN::ArrowRight => NamedKey::ArrowRight,
        WN::ArrowUp => NamedKey::ArrowUp,
        WN::ArrowDown => NamedKey::ArrowDown,
        WN::Home => NamedKey::Home,
        WN::End => NamedKey::End,
        WN::PageUp => NamedKey::PageUp,
        WN::PageDown => NamedKey::PageDown,
        WN::Shift => NamedKey::Shift,
        WN::Control => NamedKey::Control,
        WN::Alt => NamedKey::Alt,
        WN::Super => NamedKey::Super,
        WN::F1 => NamedKey::F(1),
        WN::F2 => NamedKey::F(2),
        WN::F3 => NamedKey::F(3),
        WN::F4 => NamedKey::F(4),
        WN::F5 => NamedKey::F(5),
        WN::F6 => NamedKey::F(6),
        WN::F7 => NamedKey::F(7),
        WN::F8 => NamedKey::F(8),
        WN::F9 => NamedKey::F(9),
        WN::F10 => NamedKey::F(10),
        WN::F11 => NamedKey::F(11),
        WN::F12 => NamedKey::F(12),
        _ => return None,
    })
}
