use crate::color::{palette, Color};
use crate::draw::Painter;
use crate::events::PointerEvent;
use crate::layout::BoxLayout;
use crate::object::{ObjectId, ObjectKind, WinObject};
use crate::primitives::{Point, Rect, Size};

/// Top-level window, optionally holding the root layout of a widget tree
pub struct Window {
    id: ObjectId,
    rect: Rect,
    layout: Option<BoxLayout>,
    background: Color,
    frame: Color,
}

impl Window {
    /// Create a window with the given size at the origin
    pub fn new(w: i32, h: i32) -> Self {
        Self {
            id: ObjectId::next(),
            rect: Rect::new(0, 0, w, h),
            layout: None,
            background: palette::BASE,
            frame: palette::WHITE,
        }
    }

    /// Attach the root layout (builder style)
    pub fn with_layout(mut self, layout: BoxLayout) -> Self {
        self.set_layout(layout);
        self
    }

    /// Place the window (builder style)
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.set_position(Point::new(x, y));
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_frame(mut self, color: Color) -> Self {
        self.frame = color;
        self
    }

    /// Replace the root layout and lay it out over the whole window
    pub fn set_layout(&mut self, mut layout: BoxLayout) -> Option<BoxLayout> {
        layout.set_dimensions(self.rect.size());
        layout.set_position(self.rect.origin());
        self.layout.replace(layout)
    }

    pub fn layout(&self) -> Option<&BoxLayout> {
        self.layout.as_ref()
    }

    pub fn layout_mut(&mut self) -> Option<&mut BoxLayout> {
        self.layout.as_mut()
    }
}

impl WinObject for Window {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Window
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn get_dimensions(&self, constraint: Size) -> Size {
        match &self.layout {
            Some(layout) => layout.get_dimensions(constraint),
            None => constraint,
        }
    }

    fn set_dimensions(&mut self, size: Size) {
        self.rect.w = size.w;
        self.rect.h = size.h;
        if let Some(layout) = &mut self.layout {
            layout.set_dimensions(size);
        }
    }

    fn set_position(&mut self, pos: Point) {
        self.rect.x = pos.x;
        self.rect.y = pos.y;
        if let Some(layout) = &mut self.layout {
            layout.set_position(pos);
        }
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.set_clip(Some(self.rect));
        painter.set_color(self.background);
        painter.fill_rect(self.rect);
        if let Some(layout) = &self.layout {
            layout.draw(painter);
        }
        painter.set_color(self.frame);
        painter.stroke_rect(self.rect);
        painter.set_clip(None);
    }

    fn handle_event(&mut self, event: &PointerEvent) -> Option<ObjectId> {
        if !self.rect.contains(event.pos()) {
            return None;
        }
        self.layout.as_mut()?.handle_event(event)
    }

    fn child_count(&self) -> usize {
        usize::from(self.layout.is_some())
    }

    fn child(&self, index: usize) -> Option<&dyn WinObject> {
        match index {
            0 => self.layout.as_ref().map(|layout| layout as &dyn WinObject),
            _ => None,
        }
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn WinObject> {
        match index {
            0 => self
                .layout
                .as_mut()
                .map(|layout| layout as &mut dyn WinObject),
            _ => None,
        }
    }
}
