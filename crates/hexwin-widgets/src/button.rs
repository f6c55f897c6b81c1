//! Push button with a text caption.
//!
//! A press inside the button captures the pointer. The click callback fires on
//! the matching release, wherever the pointer is by then.

use hexwin::{
    palette, Color, Metrics, ObjectId, Painter, Point, PointerEvent, Rect, Size, WinObject,
    WithBuilders,
};

/// Visual styling for a button
#[derive(Debug, Clone, PartialEq, Eq, WithBuilders)]
pub struct ButtonStyle {
    /// Background color when idle
    pub idle_color: Color,
    /// Background color while pressed
    pub pressed_color: Color,
    /// Outline color
    pub frame_color: Color,
    /// Caption color
    pub text_color: Color,
    /// Space between caption and frame on every side
    pub padding: i32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            idle_color: palette::SURFACE,
            pressed_color: palette::ACCENT,
            frame_color: palette::WHITE,
            text_color: palette::TEXT,
            padding: 2,
        }
    }
}

/// A clickable button
///
/// # Example
///
/// ```ignore
/// Button::new("Quit", metrics)
///     .on_click(|| println!("clicked"))
/// ```
pub struct Button {
    id: ObjectId,
    rect: Rect,
    text: String,
    metrics: Metrics,
    style: ButtonStyle,
    pressed: bool,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(text: impl Into<String>, metrics: Metrics) -> Self {
        Self {
            id: ObjectId::next(),
            rect: Rect::default(),
            text: text.into(),
            metrics,
            style: ButtonStyle::default(),
            pressed: false,
            on_click: None,
        }
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Set a callback to be called when the button is clicked
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True between the press and the release of a click
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn content_size(&self) -> Size {
        let text = self.metrics.measure(&self.text);
        let pad = self.style.padding.max(0) * 2;
        Size::new(text.w + pad, text.h + pad)
    }
}

impl WinObject for Button {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn get_dimensions(&self, constraint: Size) -> Size {
        constraint.max(self.content_size())
    }

    fn set_dimensions(&mut self, size: Size) {
        self.rect.w = size.w;
        self.rect.h = size.h;
    }

    fn set_position(&mut self, pos: Point) {
        self.rect.x = pos.x;
        self.rect.y = pos.y;
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.set_color(if self.pressed {
            self.style.pressed_color
        } else {
            self.style.idle_color
        });
        painter.fill_rect(self.rect);
        painter.set_color(self.style.frame_color);
        painter.stroke_rect(self.rect);

        // Caption centered in the padded content area
        let content = self.rect.inset(self.style.padding.max(0));
        let text = self.metrics.measure(&self.text);
        let origin = Point::new(
            content.x + (content.w - text.w) / 2,
            content.y + (content.h - text.h) / 2,
        );
        painter.set_color(self.style.text_color);
        painter.text(&self.text, origin);
    }

    fn handle_event(&mut self, event: &PointerEvent) -> Option<ObjectId> {
        match *event {
            PointerEvent::Down { pos, .. } if self.rect.contains(pos) => {
                self.pressed = true;
                Some(self.id)
            }
            PointerEvent::Up { .. } if self.pressed => {
                self.pressed = false;
                log::trace!("button {} {:?} clicked", self.id, self.text);
                if let Some(on_click) = &mut self.on_click {
                    on_click();
                }
                None
            }
            _ => None,
        }
    }
}
