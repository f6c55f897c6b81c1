//! Pointer events injected into the window-object tree.
//!
//! Events travel down from a window to the widget under the pointer. A handler
//! that wants the rest of the press-drag-release gesture answers with its own
//! [`ObjectId`](crate::ObjectId); the [`WindowManager`](crate::WindowManager)
//! then routes follow-up events straight to it.

use crate::input::MouseButton;
use crate::primitives::Point;

/// A pointer event in window (screen) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed
    Down { pos: Point, button: MouseButton },
    /// Button released
    Up { pos: Point, button: MouseButton },
    /// Pointer moved
    Move { pos: Point },
}

impl PointerEvent {
    pub const fn down(x: i32, y: i32, button: MouseButton) -> Self {
        Self::Down {
            pos: Point::new(x, y),
            button,
        }
    }

    pub const fn up(x: i32, y: i32, button: MouseButton) -> Self {
        Self::Up {
            pos: Point::new(x, y),
            button,
        }
    }

    pub const fn moved(x: i32, y: i32) -> Self {
        Self::Move {
            pos: Point::new(x, y),
        }
    }

    /// Pointer position of the event
    pub const fn pos(&self) -> Point {
        match *self {
            Self::Down { pos, .. } | Self::Up { pos, .. } | Self::Move { pos } => pos,
        }
    }
}
