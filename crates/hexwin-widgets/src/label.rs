use hexwin::{palette, Color, Metrics, ObjectId, Painter, Point, PointerEvent, Rect, Size, WinObject};

/// A single line of static text
pub struct Label {
    id: ObjectId,
    rect: Rect,
    text: String,
    color: Color,
    metrics: Metrics,
}

impl Label {
    /// Create a label measured with `metrics`
    pub fn new(text: impl Into<String>, metrics: Metrics) -> Self {
        Self {
            id: ObjectId::next(),
            rect: Rect::default(),
            text: text.into(),
            color: palette::TEXT,
            metrics,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. The owning layout picks up a new minimum on its next
    /// `set_dimensions`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl WinObject for Label {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn get_dimensions(&self, constraint: Size) -> Size {
        constraint.max(self.metrics.measure(&self.text))
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
        painter.set_color(self.color);
        painter.text(&self.text, self.rect.origin());
    }

    fn handle_event(&mut self, _event: &PointerEvent) -> Option<ObjectId> {
        None
    }
}
