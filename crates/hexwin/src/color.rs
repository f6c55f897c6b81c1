/// 8-bit RGBA color, as handed to the host's `set_color` primitive
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Opaque gray with all channels set to `level`
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }
}

/// Named colors used by the built-in windows and widgets
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Default text color
    pub const TEXT: Color = Color::gray(150);
    /// Window background
    pub const BASE: Color = Color::gray(32);
    /// Button / track surface
    pub const SURFACE: Color = Color::gray(64);
    /// Pressed or filled surface
    pub const ACCENT: Color = Color::rgb(90, 120, 200);
    /// Debug outline for object bounds
    pub const DEBUG_BOUNDS: Color = Color::rgb(0, 255, 0);
    /// Debug outline for layout slots
    pub const DEBUG_SLOTS: Color = Color::rgb(255, 0, 255);
    /// Debug outline for the captured object
    pub const DEBUG_CAPTURE: Color = Color::rgb(255, 0, 0);
}
