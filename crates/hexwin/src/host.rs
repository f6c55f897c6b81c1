//! Integration with the host engine's main loop.
//!
//! The host owns the window, the render loop and the input queue. It calls
//! [`Game::init`] once, then [`Game::update`] and [`Game::draw`] every frame,
//! interleaved with the input callbacks. Everything runs on one thread and
//! each callback finishes before the next one starts.

use crate::color::{palette, Color};
use crate::draw::Painter;
use crate::input::{Key, MouseButton};
use crate::manager::WindowManager;
use crate::primitives::Rect;
use hexwin_macros::WithBuilders;

/// Registration record handed to the host engine
#[derive(Clone, Debug, PartialEq, Eq, WithBuilders)]
pub struct HostConfig {
    /// Window title
    #[with_builders(into)]
    pub name: String,
    /// Logical screen width in pixels
    pub screen_width: i32,
    /// Logical screen height in pixels
    pub screen_height: i32,
    /// Integer upscaling factor applied by the host
    pub screen_scale: i32,
}

impl HostConfig {
    pub fn screen_rect(&self) -> Rect {
        Rect::new(0, 0, self.screen_width, self.screen_height)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            name: "window-test".to_string(),
            screen_width: 320,
            screen_height: 240,
            screen_scale: 1,
        }
    }
}

/// Lifecycle callbacks invoked by the host engine
pub trait Game {
    fn init(&mut self) {}

    /// Advance by `delta` seconds
    fn update(&mut self, _delta: f32) {}

    fn draw(&mut self, painter: &mut dyn Painter);

    fn key_down(&mut self, _key: &Key) {}

    fn key_up(&mut self, _key: &Key) {}

    fn text_input(&mut self, _text: &str) {}

    fn mouse_down(&mut self, _x: i32, _y: i32, _button: MouseButton) {}

    fn mouse_up(&mut self, _x: i32, _y: i32, _button: MouseButton) {}

    fn mouse_motion(&mut self, _x: i32, _y: i32) {}

    fn quit(&mut self) {}
}

type Setup = Box<dyn FnOnce(&mut WindowManager)>;

/// [`Game`] implementation driving a [`WindowManager`]
pub struct GuiApp {
    config: HostConfig,
    manager: WindowManager,
    clear_color: Color,
    setup: Option<Setup>,
    running: bool,
}

impl GuiApp {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            manager: WindowManager::new(),
            clear_color: palette::BLACK,
            setup: None,
            running: true,
        }
    }

    /// Build the initial windows when the host calls `init`
    pub fn with_setup(mut self, setup: impl FnOnce(&mut WindowManager) + 'static) -> Self {
        self.setup = Some(Box::new(setup));
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn manager(&self) -> &WindowManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut WindowManager {
        &mut self.manager
    }

    /// False once the host reported quit
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Game for GuiApp {
    fn init(&mut self) {
        log::debug!(
            "{}: {}x{} at scale {}",
            self.config.name,
            self.config.screen_width,
            self.config.screen_height,
            self.config.screen_scale
        );
        if let Some(setup) = self.setup.take() {
            setup(&mut self.manager);
        }
    }

    fn draw(&mut self, painter: &mut dyn Painter) {
        painter.set_color(self.clear_color);
        painter.fill_rect(self.config.screen_rect());
        self.manager.draw(painter);
    }

    fn key_down(&mut self, key: &Key) {
        log::trace!("key down {key:?} ignored");
    }

    fn key_up(&mut self, key: &Key) {
        log::trace!("key up {key:?} ignored");
    }

    fn text_input(&mut self, text: &str) {
        log::trace!("text input {text:?} ignored");
    }

    fn mouse_down(&mut self, x: i32, y: i32, button: MouseButton) {
        self.manager.pointer_down(x, y, button);
    }

    fn mouse_up(&mut self, x: i32, y: i32, button: MouseButton) {
        self.manager.pointer_up(x, y, button);
    }

    fn mouse_motion(&mut self, x: i32, y: i32) {
        self.manager.pointer_move(x, y);
    }

    fn quit(&mut self) {
        log::debug!("{}: quit requested", self.config.name);
        self.running = false;
    }
}
