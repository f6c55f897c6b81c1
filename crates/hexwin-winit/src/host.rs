use crate::input::{convert_key, convert_mouse_button};
use hexwin::{Game, Painter, Point};
use std::time::Instant;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::Key as WinitKey;

/// Drives a [`Game`] from winit window events
pub struct WinitHost<G: Game> {
    game: G,
    /// Window scale factor reported by winit
    scale_factor: f64,
    /// Integer upscaling from [`hexwin::HostConfig::screen_scale`]
    screen_scale: i32,
    cursor: Point,
    last_frame: Option<Instant>,
    initialized: bool,
}

impl<G: Game> WinitHost<G> {
    pub fn new(game: G) -> Self {
        Self {
            game,
            scale_factor: 1.0,
            screen_scale: 1,
            cursor: Point::zero(),
            last_frame: None,
            initialized: false,
        }
    }

    /// Take the integer screen scale from the host configuration
    pub fn with_screen_scale(mut self, screen_scale: i32) -> Self {
        if screen_scale > 0 {
            self.screen_scale = screen_scale;
        } else {
            log::warn!("ignoring non-positive screen scale {screen_scale}");
        }
        self
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        } else {
            log::warn!("ignoring non-positive scale factor {scale_factor}");
        }
    }

    /// Physical pixels per logical pixel
    pub fn scale(&self) -> f64 {
        self.scale_factor * f64::from(self.screen_scale)
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    /// Last cursor position in logical pixels
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Run `init` once; later calls do nothing
    pub fn init(&mut self) {
        if !self.initialized {
            self.initialized = true;
            self.game.init();
        }
    }

    /// Advance the game by the time since the previous frame and draw it
    pub fn frame(&mut self, painter: &mut dyn Painter) {
        self.init();
        let now = Instant::now();
        let delta = self
            .last_frame
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
        self.last_frame = Some(now);

        self.game.update(delta);
        self.game.draw(painter);
    }

    /// Process a winit WindowEvent
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::KeyboardInput { event, .. } => {
                self.key_input(&event.logical_key, event.state, event.text.as_deref());
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::debug!("scale factor changed to {scale_factor}");
                self.set_scale_factor(*scale_factor);
            }
            WindowEvent::CloseRequested => self.game.quit(),
            _ => {}
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let scale = self.scale();
        self.cursor = Point::new(
            (position.x / scale).floor() as i32,
            (position.y / scale).floor() as i32,
        );
        self.game.mouse_motion(self.cursor.x, self.cursor.y);
    }

    /// Button press or release at the last known cursor position
    pub fn mouse_input(&mut self, state: ElementState, button: winit::event::MouseButton) {
        let button = convert_mouse_button(button);
        let Point { x, y } = self.cursor;
        match state {
            ElementState::Pressed => self.game.mouse_down(x, y, button),
            ElementState::Released => self.game.mouse_up(x, y, button),
        }
    }

    /// Key press or release; `text` is what the press typed, if anything
    pub fn key_input(&mut self, key: &WinitKey, state: ElementState, text: Option<&str>) {
        let key = convert_key(key);
        match state {
            ElementState::Pressed => {
                self.game.key_down(&key);
                if let Some(text) = text.filter(|text| !text.chars().any(char::is_control)) {
                    self.game.text_input(text);
                }
            }
            ElementState::Released => self.game.key_up(&key),
        }
    }
}
