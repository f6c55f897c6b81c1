//! Drawing capability consumed from the host.
//!
//! Window objects never talk to a graphics API directly. They paint through the
//! [`Painter`] trait, which mirrors the primitive set a minimal engine exposes:
//! a current color, filled and outlined rectangles, a clip region, measured text
//! and sprite-frame blits.
//!
//! [`DrawList`] is a recording painter. Backends that prefer a command buffer can
//! replay it, and tests use it to inspect what was drawn.

use crate::color::Color;
use crate::measure::Metrics;
use crate::primitives::{Point, Rect};

/// Index of a tileset / sprite sheet registered with the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteSheetId(pub u32);

/// Primitive drawing operations provided by the host engine
pub trait Painter {
    /// Set the color used by subsequent fill, stroke and text operations
    fn set_color(&mut self, color: Color);

    /// Fill a rectangle with the current color
    fn fill_rect(&mut self, rect: Rect);

    /// Outline a rectangle with the current color
    fn stroke_rect(&mut self, rect: Rect);

    /// Restrict drawing to `rect`, or lift the restriction with `None`
    fn set_clip(&mut self, rect: Option<Rect>);

    /// Draw `text` with its top-left corner at `origin`, returning its bounding box
    fn text(&mut self, text: &str, origin: Point) -> Rect;

    /// Blit frame `frame` of a sprite sheet with its top-left corner at `origin`
    fn blit(&mut self, sheet: SpriteSheetId, frame: usize, origin: Point);
}

/// A single recorded drawing operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    SetColor(Color),
    FillRect(Rect),
    StrokeRect(Rect),
    SetClip(Option<Rect>),
    Text { text: String, bounds: Rect },
    Blit {
        sheet: SpriteSheetId,
        frame: usize,
        origin: Point,
    },
}

/// A [`Painter`] that records every operation in order
pub struct DrawList {
    metrics: Metrics,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty list; `metrics` computes the bounds reported for text
    pub fn new(metrics: Metrics) -> Self {
        Self {
            metrics,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty for the next frame
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text strings drawn so far, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Replay the recorded commands onto another painter
    pub fn replay(&self, painter: &mut dyn Painter) {
        for command in &self.commands {
            match command {
                DrawCommand::SetColor(color) => painter.set_color(*color),
                DrawCommand::FillRect(rect) => painter.fill_rect(*rect),
                DrawCommand::StrokeRect(rect) => painter.stroke_rect(*rect),
                DrawCommand::SetClip(rect) => painter.set_clip(*rect),
                DrawCommand::Text { text, bounds } => {
                    painter.text(text, bounds.origin());
                }
                DrawCommand::Blit {
                    sheet,
                    frame,
                    origin,
                } => painter.blit(*sheet, *frame, *origin),
            }
        }
    }
}

impl Painter for DrawList {
    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::StrokeRect(rect));
    }

    fn set_clip(&mut self, rect: Option<Rect>) {
        self.commands.push(DrawCommand::SetClip(rect));
    }

    fn text(&mut self, text: &str, origin: Point) -> Rect {
        let bounds = Rect::from_origin_size(origin, self.metrics.measure(text));
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            bounds,
        });
        bounds
    }

    fn blit(&mut self, sheet: SpriteSheetId, frame: usize, origin: Point) {
        self.commands.push(DrawCommand::Blit {
            sheet,
            frame,
            origin,
        });
    }
}
