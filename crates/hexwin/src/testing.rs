use crate::{ObjectId, Painter, Point, PointerEvent, Rect, Size, WinObject};

/// Leaf with a fixed minimum that records every event it receives
pub(crate) struct Block {
    id: ObjectId,
    rect: Rect,
    min: Size,
    claims: bool,
    pub events: Vec<PointerEvent>,
}

impl Block {
    pub fn new(w: i32, h: i32) -> Self {
        Self {
            id: ObjectId::next(),
            rect: Rect::default(),
            min: Size::new(w, h),
            claims: false,
            events: Vec::new(),
        }
    }

    /// A block that asks for capture on button down
    pub fn claiming(w: i32, h: i32) -> Self {
        Self {
            claims: true,
            ..Self::new(w, h)
        }
    }
}

impl WinObject for Block {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn get_dimensions(&self, constraint: Size) -> Size {
        constraint.max(self.min)
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
        painter.fill_rect(self.rect);
    }

    fn handle_event(&mut self, event: &PointerEvent) -> Option<ObjectId> {
        self.events.push(*event);
        match event {
            PointerEvent::Down { .. } if self.claims => Some(self.id),
            _ => None,
        }
    }
}
