//! Top-level window registry and pointer capture.
//!
//! The manager forwards host pointer input into the window trees. A button
//! press is hit-tested against the windows in insertion order; the first
//! window containing the pointer gets the event, even if a later window
//! overlaps it. When the press is claimed, the claiming object holds capture
//! and receives every following move and the next release directly, wherever
//! the pointer is. Any release ends capture, whichever button it was.

use crate::debug::{draw_overlay, DebugOptions};
use crate::draw::Painter;
use crate::events::PointerEvent;
use crate::input::MouseButton;
use crate::object::{find_object, find_object_mut, ObjectId, WinObject};
use crate::window::Window;

/// Capture state of the window manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capture {
    /// No object holds capture
    #[default]
    Idle,
    /// `target` receives all pointer events until the next release
    Captured {
        target: ObjectId,
        /// Button that started the gesture
        button: MouseButton,
    },
}

impl Capture {
    pub const fn target(&self) -> Option<ObjectId> {
        match *self {
            Self::Idle => None,
            Self::Captured { target, .. } => Some(target),
        }
    }
}

/// Ordered collection of top-level windows plus capture state
#[derive(Default)]
pub struct WindowManager {
    windows: Vec<Window>,
    capture: Capture,
    debug: DebugOptions,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a window on top of the draw order, returning its id
    pub fn add_window(&mut self, window: Window) -> ObjectId {
        let id = window.id();
        self.windows.push(window);
        id
    }

    /// Remove a window; capture held inside it is dropped
    pub fn remove_window(&mut self, id: ObjectId) -> Option<Window> {
        let index = self.windows.iter().position(|window| window.id() == id)?;
        let window = self.windows.remove(index);
        if let Some(target) = self.capture.target() {
            if find_object(&window, target).is_some() {
                log::debug!("capture of {target} dropped with window {id}");
                self.capture = Capture::Idle;
            }
        }
        Some(window)
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn window(&self, id: ObjectId) -> Option<&Window> {
        self.windows.iter().find(|window| window.id() == id)
    }

    pub fn window_mut(&mut self, id: ObjectId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|window| window.id() == id)
    }

    /// Look up any object in any window
    pub fn object(&self, id: ObjectId) -> Option<&dyn WinObject> {
        self.windows
            .iter()
            .find_map(|window| find_object(window, id))
    }

    pub fn capture(&self) -> Capture {
        self.capture
    }

    pub fn debug_options(&self) -> DebugOptions {
        self.debug
    }

    pub fn set_debug_options(&mut self, options: DebugOptions) {
        self.debug = options;
    }

    pub fn pointer_down(&mut self, x: i32, y: i32, button: MouseButton) {
        self.dispatch(PointerEvent::down(x, y, button));
    }

    pub fn pointer_up(&mut self, x: i32, y: i32, button: MouseButton) {
        self.dispatch(PointerEvent::up(x, y, button));
    }

    pub fn pointer_move(&mut self, x: i32, y: i32) {
        self.dispatch(PointerEvent::moved(x, y));
    }

    /// Route one pointer event and update the capture state
    pub fn dispatch(&mut self, event: PointerEvent) {
        match (self.capture, event) {
            (Capture::Captured { target, .. }, PointerEvent::Up { .. }) => {
                // The released button is deliberately not compared with the
                // one that started the gesture.
                self.deliver(target, &event);
                log::trace!("capture released by {target}");
                self.capture = Capture::Idle;
            }
            (Capture::Captured { target, .. }, _) => {
                if !self.deliver(target, &event) {
                    log::warn!("captured object {target} is gone, releasing capture");
                    self.capture = Capture::Idle;
                }
            }
            (Capture::Idle, PointerEvent::Down { pos, button }) => {
                let Some(window) = self
                    .windows
                    .iter_mut()
                    .find(|window| window.rect().contains(pos))
                else {
                    log::debug!("pointer down at ({}, {}) outside all windows", pos.x, pos.y);
                    return;
                };

                match window.handle_event(&event) {
                    Some(target) => {
                        log::trace!("{target} captured the pointer with {button:?}");
                        self.capture = Capture::Captured { target, button };
                    }
                    None => {
                        log::debug!(
                            "pointer down at ({}, {}) not handled in window {}",
                            pos.x,
                            pos.y,
                            window.id()
                        );
                    }
                }
            }
            (Capture::Idle, _) => {}
        }
    }

    /// Hand `event` to the object with `target`, bypassing hit-testing
    fn deliver(&mut self, target: ObjectId, event: &PointerEvent) -> bool {
        for window in &mut self.windows {
            if let Some(object) = find_object_mut(window, target) {
                object.handle_event(event);
                return true;
            }
        }
        false
    }

    /// Draw all windows in insertion order, then the debug overlay
    pub fn draw(&self, painter: &mut dyn Painter) {
        for window in &self.windows {
            window.draw(painter);
        }

        if self.debug.is_enabled() {
            for window in &self.windows {
                draw_overlay(&self.debug, window, self.capture.target(), painter);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DrawCommand, DrawList};
    use crate::layout::{BoxLayout, LayoutFlags};
    use crate::measure::Metrics;
    use crate::primitives::{Point, Rect};
    use crate::testing::Block;

    /// One 100x100 window at `(x, y)` filled by a single block
    fn window_with_block(x: i32, y: i32, block: Block) -> (Window, ObjectId) {
        let id = block.id();
        let window = Window::new(100, 100)
            .at(x, y)
            .with_layout(BoxLayout::vbox().with_child(block, LayoutFlags::EXPAND));
        (window, id)
    }

    fn events_of(manager: &WindowManager, id: ObjectId) -> Vec<PointerEvent> {
        manager
            .object(id)
            .and_then(|object| object.downcast_ref::<Block>())
            .map(|block| block.events.clone())
            .unwrap_or_default()
    }

    #[test]
    fn test_down_on_claiming_widget_captures() {
        let mut manager = WindowManager::new();
        let (window, block) = window_with_block(0, 0, Block::claiming(0, 0));
        manager.add_window(window);

        manager.pointer_down(10, 10, MouseButton::Left);
        assert_eq!(
            manager.capture(),
            Capture::Captured {
                target: block,
                button: MouseButton::Left
            }
        );
    }

    #[test]
    fn test_capture_receives_moves_anywhere_until_up() {
        let mut manager = WindowManager::new();
        let (window, block) = window_with_block(0, 0, Block::claiming(0, 0));
        manager.add_window(window);

        manager.pointer_down(10, 10, MouseButton::Left);
        manager.pointer_move(500, -20);
        manager.pointer_move(-3, 900);
        manager.pointer_up(1000, 1000, MouseButton::Left);

        assert_eq!(manager.capture(), Capture::Idle);
        assert_eq!(
            events_of(&manager, block),
            vec![
                PointerEvent::down(10, 10, MouseButton::Left),
                PointerEvent::moved(500, -20),
                PointerEvent::moved(-3, 900),
                PointerEvent::up(1000, 1000, MouseButton::Left),
            ]
        );

        // Back to idle: moves are dropped
        manager.pointer_move(10, 10);
        assert_eq!(events_of(&manager, block).len(), 4);
    }

    #[test]
    fn test_any_button_releases_capture() {
        let mut manager = WindowManager::new();
        let (window, _) = window_with_block(0, 0, Block::claiming(0, 0));
        manager.add_window(window);

        manager.pointer_down(10, 10, MouseButton::Left);
        manager.pointer_up(10, 10, MouseButton::Right);
        assert_eq!(manager.capture(), Capture::Idle);
    }

    #[test]
    fn test_unclaimed_down_stays_idle() {
        let mut manager = WindowManager::new();
        let (window, block) = window_with_block(0, 0, Block::new(0, 0));
        manager.add_window(window);

        manager.pointer_down(10, 10, MouseButton::Left);
        assert_eq!(manager.capture(), Capture::Idle);
        assert_eq!(events_of(&manager, block).len(), 1);

        // Idle up and move never reach the tree
        manager.pointer_up(10, 10, MouseButton::Left);
        manager.pointer_move(11, 11);
        assert_eq!(events_of(&manager, block).len(), 1);
    }

    #[test]
    fn test_first_window_wins_over_later_overlapping_window() {
        let mut manager = WindowManager::new();
        let (first, first_block) = window_with_block(0, 0, Block::new(0, 0));
        let (second, second_block) = window_with_block(50, 50, Block::claiming(0, 0));
        manager.add_window(first);
        manager.add_window(second);

        // (60, 60) lies in both; the earlier window gets it and does not claim
        manager.pointer_down(60, 60, MouseButton::Left);
        assert_eq!(manager.capture(), Capture::Idle);
        assert_eq!(events_of(&manager, first_block).len(), 1);
        assert!(events_of(&manager, second_block).is_empty());

        // Outside the first window the second one is reachable
        manager.pointer_down(120, 120, MouseButton::Left);
        assert_eq!(manager.capture().target(), Some(second_block));
    }

    #[test]
    fn test_down_outside_all_windows_is_dropped() {
        let mut manager = WindowManager::new();
        let (window, block) = window_with_block(0, 0, Block::claiming(0, 0));
        manager.add_window(window);

        manager.pointer_down(300, 300, MouseButton::Left);
        assert_eq!(manager.capture(), Capture::Idle);
        assert!(events_of(&manager, block).is_empty());
    }

    #[test]
    fn test_second_down_goes_to_captured_object() {
        let mut manager = WindowManager::new();
        let (window, block) = window_with_block(0, 0, Block::claiming(0, 0));
        let (other, other_block) = window_with_block(200, 0, Block::claiming(0, 0));
        manager.add_window(window);
        manager.add_window(other);

        manager.pointer_down(10, 10, MouseButton::Left);
        manager.pointer_down(210, 10, MouseButton::Right);
        assert_eq!(manager.capture().target(), Some(block));
        assert_eq!(events_of(&manager, block).len(), 2);
        assert!(events_of(&manager, other_block).is_empty());
    }

    #[test]
    fn test_removing_window_drops_its_capture() {
        let mut manager = WindowManager::new();
        let (window, _) = window_with_block(0, 0, Block::claiming(0, 0));
        let window_id = manager.add_window(window);

        manager.pointer_down(10, 10, MouseButton::Left);
        assert!(manager.remove_window(window_id).is_some());
        assert_eq!(manager.capture(), Capture::Idle);
        assert!(manager.windows().is_empty());
        assert!(manager.remove_window(window_id).is_none());
    }

    #[test]
    fn test_draw_in_insertion_order_with_capture_overlay() {
        let mut manager = WindowManager::new();
        let (first, _) = window_with_block(0, 0, Block::claiming(0, 0));
        let (second, _) = window_with_block(10, 10, Block::new(0, 0));
        manager.add_window(first);
        manager.add_window(second);
        manager.set_debug_options(DebugOptions::none().with_show_capture(true));
        manager.pointer_down(5, 5, MouseButton::Left);

        let mut list = DrawList::new(Metrics::default());
        manager.draw(&mut list);

        let clips: Vec<Point> = list
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::SetClip(Some(rect)) => Some(rect.origin()),
                _ => None,
            })
            .collect();
        assert_eq!(clips, vec![Point::new(0, 0), Point::new(10, 10)]);
        assert_eq!(
            list.commands().last(),
            Some(&DrawCommand::StrokeRect(Rect::new(0, 0, 100, 100)))
        );
    }
}
