use hexwin::{ObjectId, Painter, Point, PointerEvent, Rect, Size, WinObject};

/// Invisible spacer with a fixed minimum size
pub struct Space {
    id: ObjectId,
    rect: Rect,
    min: Size,
}

impl Space {
    pub fn new(w: i32, h: i32) -> Self {
        Self {
            id: ObjectId::next(),
            rect: Rect::default(),
            min: Size::new(w.max(0), h.max(0)),
        }
    }
}

impl WinObject for Space {
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

    fn draw(&self, _painter: &mut dyn Painter) {}

    fn handle_event(&mut self, _event: &PointerEvent) -> Option<ObjectId> {
        None
    }
}
